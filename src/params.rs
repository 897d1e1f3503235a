//! User-adjustable parameters and their URL-fragment codec.
//!
//! The whole configuration fits in the URL hash so a look can be shared by
//! link. Reading is tolerant: a missing or unparseable token falls back to
//! that field's default, and out-of-range numbers are clamped, so a degraded
//! link still loads something sensible. Writing is canonical: always the full
//! field list, integers only, booleans as 0/1.

/// Lower bound for every numeric parameter (matches the slider range).
pub const PARAM_MIN: u32 = 1;
/// Upper bound for every numeric parameter.
pub const PARAM_MAX: u32 = 100;

/// The full set of user-adjustable inputs.
///
/// Field order here is also the token order in the hash encoding:
/// `zoom:thickness:aspect:textSize:separation:showLogo:unicursal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    pub zoom: u32,
    pub thickness: u32,
    pub aspect: u32,
    pub text_size: u32,
    pub separation: u32,
    pub show_logo: bool,
    pub unicursal: bool,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            zoom: 25,
            thickness: 25,
            aspect: 25,
            text_size: 25,
            separation: 55,
            show_logo: true,
            unicursal: false,
        }
    }
}

impl ParameterSet {
    /// Parse a URL hash (with or without the leading `#`).
    ///
    /// Never fails: each bad token independently falls back to its default.
    pub fn from_hash(hash: &str) -> Self {
        let trimmed = hash.strip_prefix('#').unwrap_or(hash);
        let tokens: Vec<&str> = trimmed.split(':').collect();
        let d = Self::default();
        Self {
            zoom: num(&tokens, 0, d.zoom),
            thickness: num(&tokens, 1, d.thickness),
            aspect: num(&tokens, 2, d.aspect),
            text_size: num(&tokens, 3, d.text_size),
            separation: num(&tokens, 4, d.separation),
            show_logo: flag(&tokens, 5, d.show_logo),
            unicursal: flag(&tokens, 6, d.unicursal),
        }
    }

    /// Canonical hash encoding (no leading `#`).
    pub fn to_hash(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}:{}",
            self.zoom,
            self.thickness,
            self.aspect,
            self.text_size,
            self.separation,
            u8::from(self.show_logo),
            u8::from(self.unicursal),
        )
    }

    /// Restore all fields to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn num(tokens: &[&str], index: usize, default: u32) -> u32 {
    tokens
        .get(index)
        .and_then(|t| t.parse::<u32>().ok())
        .map_or(default, |v| v.clamp(PARAM_MIN, PARAM_MAX))
}

fn flag(tokens: &[&str], index: usize, default: bool) -> bool {
    tokens
        .get(index)
        .and_then(|t| t.parse::<u8>().ok())
        .map_or(default, |v| v != 0)
}
