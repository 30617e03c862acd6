//! Key layers and direction-to-symbol mapping
//!
//! Nine keys in a 3x3 grid, row-major. Each key has a base symbol (typed on
//! tap) and up to eight directional overrides. The letter layer packs all 26
//! Latin letters onto the grid: nine bases plus seventeen swipes. The digit
//! layer is plain 1-9; 0 lives on the space bar while numeric mode is on.

use crate::input::SwipeDirection;

/// Directional symbol overrides for one key. Empty slots fall back to the
/// key's base symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyMapping {
    slots: [Option<char>; 8],
}

impl KeyMapping {
    pub const fn empty() -> Self {
        Self { slots: [None; 8] }
    }

    pub fn set(&mut self, direction: SwipeDirection, symbol: char) {
        if let Some(slot) = direction.slot() {
            self.slots[slot] = Some(symbol);
        }
    }

    pub fn get(&self, direction: SwipeDirection) -> Option<char> {
        direction.slot().and_then(|slot| self.slots[slot])
    }

    /// Directions carrying an override, clockwise from `Up`. Rendering uses
    /// this to place the small hint glyphs around a key cap.
    pub fn entries(&self) -> impl Iterator<Item = (SwipeDirection, char)> + '_ {
        SwipeDirection::compass()
            .iter()
            .filter_map(|&direction| self.get(direction).map(|symbol| (direction, symbol)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// One grid key: the tap symbol plus its swipe overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDefinition {
    pub base: char,
    pub mapping: KeyMapping,
}

impl KeyDefinition {
    pub const fn new(base: char) -> Self {
        Self {
            base,
            mapping: KeyMapping::empty(),
        }
    }

    /// Builder-style swipe override, used by the layer tables.
    pub fn swipe(mut self, direction: SwipeDirection, symbol: char) -> Self {
        self.mapping.set(direction, symbol);
        self
    }

    /// Resolve a classified direction to the symbol this key emits.
    ///
    /// Taps and unmapped directions resolve to the base symbol; the result is
    /// always uppercased, whatever case the table used.
    pub fn resolve(&self, direction: SwipeDirection) -> char {
        self.mapping
            .get(direction)
            .unwrap_or(self.base)
            .to_ascii_uppercase()
    }
}

/// Which key layer is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMode {
    Letters,
    Numeric,
}

impl KeyboardMode {
    pub fn keys(self) -> [KeyDefinition; 9] {
        match self {
            KeyboardMode::Letters => letter_keys(),
            KeyboardMode::Numeric => digit_keys(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            KeyboardMode::Letters => KeyboardMode::Numeric,
            KeyboardMode::Numeric => KeyboardMode::Letters,
        }
    }

    /// Label on the mode toggle key; names the layer it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            KeyboardMode::Letters => "#123",
            KeyboardMode::Numeric => "ABC",
        }
    }
}

/// The letter layer. Base symbols sit on the caps; each override points
/// toward where its letter is drawn on the key.
pub fn letter_keys() -> [KeyDefinition; 9] {
    use SwipeDirection::*;

    [
        KeyDefinition::new('A').swipe(DownRight, 'V'),
        KeyDefinition::new('N').swipe(Down, 'L'),
        KeyDefinition::new('I').swipe(DownLeft, 'X'),
        KeyDefinition::new('H').swipe(Left, 'K'),
        KeyDefinition::new('O')
            .swipe(Up, 'U')
            .swipe(UpRight, 'P')
            .swipe(Right, 'C')
            .swipe(DownRight, 'J')
            .swipe(Down, 'D')
            .swipe(DownLeft, 'G')
            .swipe(Left, 'B')
            .swipe(UpLeft, 'Q'),
        KeyDefinition::new('R').swipe(Left, 'M'),
        KeyDefinition::new('T').swipe(UpRight, 'Y'),
        KeyDefinition::new('E').swipe(Up, 'W').swipe(Right, 'Z'),
        KeyDefinition::new('S').swipe(UpLeft, 'F'),
    ]
}

/// The numeric layer: 1-9 row-major, no swipe overrides.
pub fn digit_keys() -> [KeyDefinition; 9] {
    [
        KeyDefinition::new('1'),
        KeyDefinition::new('2'),
        KeyDefinition::new('3'),
        KeyDefinition::new('4'),
        KeyDefinition::new('5'),
        KeyDefinition::new('6'),
        KeyDefinition::new('7'),
        KeyDefinition::new('8'),
        KeyDefinition::new('9'),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::classify;
    use std::collections::HashSet;

    #[test]
    fn test_tap_resolves_to_base() {
        let key = KeyDefinition::new('O').swipe(SwipeDirection::Up, 'U');
        assert_eq!(key.resolve(SwipeDirection::Tap), 'O');
    }

    #[test]
    fn test_unmapped_direction_falls_back_to_base() {
        let key = KeyDefinition::new('A').swipe(SwipeDirection::DownRight, 'V');
        assert_eq!(key.resolve(SwipeDirection::Up), 'A');
        assert_eq!(key.resolve(SwipeDirection::Left), 'A');
    }

    #[test]
    fn test_mapped_direction_resolves_to_override() {
        let key = KeyDefinition::new('E')
            .swipe(SwipeDirection::Up, 'W')
            .swipe(SwipeDirection::Right, 'Z');
        assert_eq!(key.resolve(SwipeDirection::Up), 'W');
        assert_eq!(key.resolve(SwipeDirection::Right), 'Z');
    }

    #[test]
    fn test_output_is_uppercased_regardless_of_table_case() {
        let key = KeyDefinition::new('o').swipe(SwipeDirection::Down, 'd');
        assert_eq!(key.resolve(SwipeDirection::Tap), 'O');
        assert_eq!(key.resolve(SwipeDirection::Down), 'D');
    }

    #[test]
    fn test_classified_drags_resolve_through_a_key() {
        // The walkthrough case: O with a few overrides, driven by raw drags
        let key = KeyDefinition::new('O')
            .swipe(SwipeDirection::Up, 'U')
            .swipe(SwipeDirection::Right, 'B')
            .swipe(SwipeDirection::DownLeft, 'G');

        assert_eq!(key.resolve(classify(0.0, -50.0, 30.0)), 'U');
        assert_eq!(key.resolve(classify(5.0, 5.0, 30.0)), 'O');
    }

    #[test]
    fn test_letter_layer_covers_the_alphabet_exactly_once() {
        let mut seen = HashSet::new();
        for key in letter_keys() {
            assert!(seen.insert(key.base), "duplicate base {}", key.base);
            for (_, symbol) in key.mapping.entries() {
                assert!(seen.insert(symbol), "duplicate override {symbol}");
            }
        }

        assert_eq!(seen.len(), 26);
        for ch in 'A'..='Z' {
            assert!(seen.contains(&ch), "missing {ch}");
        }
    }

    #[test]
    fn test_digit_layer_has_no_overrides() {
        for (i, key) in digit_keys().iter().enumerate() {
            assert_eq!(key.base, char::from_digit(i as u32 + 1, 10).unwrap());
            assert!(key.mapping.is_empty());
            assert_eq!(key.resolve(SwipeDirection::Left), key.base);
        }
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        assert_eq!(KeyboardMode::Letters.toggled(), KeyboardMode::Numeric);
        assert_eq!(KeyboardMode::Numeric.toggled(), KeyboardMode::Letters);
        assert_eq!(KeyboardMode::Letters.toggle_label(), "#123");
        assert_eq!(KeyboardMode::Numeric.toggle_label(), "ABC");
    }
}
