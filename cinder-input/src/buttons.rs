//! Mouse button indices.

pub const LEFT: usize = 0;
pub const RIGHT: usize = 1;
pub const MIDDLE: usize = 2;

/// Size of button-indexed state arrays; leaves room for back/forward.
pub const COUNT: usize = 5;

/// Map a DOM `MouseEvent.button` value to a canonical button index.
/// Anything unrecognized is treated as the primary button.
pub fn from_dom(button: i16) -> usize {
    match button {
        0 => LEFT,
        1 => MIDDLE,
        2 => RIGHT,
        _ => LEFT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_mapping() {
        assert_eq!(from_dom(0), LEFT);
        assert_eq!(from_dom(1), MIDDLE);
        assert_eq!(from_dom(2), RIGHT);
        assert_eq!(from_dom(7), LEFT);
    }
}
