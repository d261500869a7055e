//! Legacy `§`-prefixed chat formatting codes.

pub const COLOR_CHAR: char = '§';

pub const BLACK: &str = "§0";
pub const DARK_BLUE: &str = "§1";
pub const DARK_GREEN: &str = "§2";
pub const DARK_AQUA: &str = "§3";
pub const DARK_RED: &str = "§4";
pub const DARK_PURPLE: &str = "§5";
pub const GOLD: &str = "§6";
pub const GRAY: &str = "§7";
pub const DARK_GRAY: &str = "§8";
pub const BLUE: &str = "§9";
pub const GREEN: &str = "§a";
pub const AQUA: &str = "§b";
pub const RED: &str = "§c";
pub const LIGHT_PURPLE: &str = "§d";
pub const YELLOW: &str = "§e";
pub const WHITE: &str = "§f";

pub const MAGIC: &str = "§k";
pub const BOLD: &str = "§l";
pub const STRIKETHROUGH: &str = "§m";
pub const UNDERLINE: &str = "§n";
pub const ITALIC: &str = "§o";

pub const RESET: &str = "§r";

const CODES: &str = "0123456789abcdefklmnor";

/// Rewrites `alt`-prefixed codes (commonly `&`) to the wire's `§` prefix.
pub fn translate_color_codes(alt: char, message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        if c == alt {
            if let Some(&next) = chars.peek() {
                if CODES.contains(next.to_ascii_lowercase()) {
                    out.push(COLOR_CHAR);
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Removes every formatting code from the message.
pub fn strip_color_codes(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars().peekable();
    while let Some(c) = chars.next() {
        if c == COLOR_CHAR {
            if let Some(&next) = chars.peek() {
                if CODES.contains(next.to_ascii_lowercase()) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_alternate_prefix() {
        assert_eq!(translate_color_codes('&', "&cred &ltext"), "§cred §ltext");
        assert_eq!(translate_color_codes('&', "no codes"), "no codes");
        assert_eq!(translate_color_codes('&', "&zkept"), "&zkept");
    }

    #[test]
    fn strip_removes_codes() {
        assert_eq!(strip_color_codes("§cbye§r"), "bye");
        assert_eq!(strip_color_codes("plain"), "plain");
    }

    #[test]
    fn strip_keeps_trailing_section_sign() {
        assert_eq!(strip_color_codes("odd§"), "odd§");
    }
}
