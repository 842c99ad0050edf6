//! Scroll-reveal latches for page sections.
//!
//! DESIGN
//! ======
//! `SectionVisibility` maps a reveal key (a section id, or `section/index` for
//! items inside a section) to a one-way `revealed` flag. `reveal` is the only
//! writer and it only ever sets `true`, so scrolling an element back out of
//! view never hides it again.
//!
//! Keys are independent: revealing one never touches another.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;

use crate::util::viewport::ViewportObserver;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    revealed: HashMap<String, bool>,
}

impl SectionVisibility {
    /// Start tracking `key` as not yet revealed. Already-known keys keep their flag.
    pub fn track(&mut self, key: &str) {
        self.revealed.entry(key.to_owned()).or_insert(false);
    }

    /// Latch `key` as revealed. Returns `true` only on the first reveal.
    pub fn reveal(&mut self, key: &str) -> bool {
        let flag = self.revealed.entry(key.to_owned()).or_insert(false);
        if *flag {
            return false;
        }
        *flag = true;
        log::debug!("revealed {key}");
        true
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn is_tracked(&self, key: &str) -> bool {
        self.revealed.contains_key(key)
    }

    #[cfg(test)]
    /// Tracked keys still waiting for their first intersection.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.revealed
            .iter()
            .filter(|(_, revealed)| !**revealed)
            .map(|(key, _)| key.as_str())
    }
}

/// Reveal key for the `index`th item inside `section`.
pub fn item_key(section: &str, index: usize) -> String {
    format!("{section}/{index}")
}

/// Observe `target` until it first intersects, then call `on_reveal`.
///
/// Keys that are already revealed are not observed again. Returns whether an
/// observation was started.
pub fn arm_reveal<O>(
    observer: &O,
    target: &O::Target,
    visibility: &SectionVisibility,
    key: &str,
    on_reveal: impl FnOnce() + 'static,
) -> bool
where
    O: ViewportObserver + ?Sized,
{
    if visibility.is_revealed(key) {
        return false;
    }
    observer.observe(target, Box::new(on_reveal));
    true
}

/// Entrance motion applied once a reveal key latches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    /// Rise from slightly below while fading in.
    #[default]
    FadeUp,
    SlideFromLeft,
    SlideFromRight,
    ScaleIn,
}

impl RevealVariant {
    fn modifier(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal--fade-up",
            Self::SlideFromLeft => "reveal--from-left",
            Self::SlideFromRight => "reveal--from-right",
            Self::ScaleIn => "reveal--scale-in",
        }
    }

    /// Class list for the wrapper element.
    pub fn class(self, revealed: bool) -> String {
        if revealed {
            format!("reveal {} reveal--visible", self.modifier())
        } else {
            format!("reveal {}", self.modifier())
        }
    }
}

/// Delay for the `index`th item of a staggered list.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Inline style carrying a reveal's transition delay.
pub fn delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms;")
}
