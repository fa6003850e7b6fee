/// Milliseconds from a CSS time value (`"250ms"`, `"1.2s"`, `"300"`).
/// Like `parseFloat`, only the leading number is read, so `"300px"` is 300.
/// Anything without a leading number counts as zero.
pub fn parse_css_time(value: &str) -> f64 {
    let trimmed = value.trim();
    let scale = if trimmed.ends_with("ms") {
        1.0
    } else if trimmed.ends_with('s') {
        1000.0
    } else {
        1.0
    };
    match leading_number(trimmed).parse::<f64>() {
        Ok(n) if n.is_finite() => n * scale,
        _ => 0.0,
    }
}

/// Longest prefix that reads as a decimal number, possibly empty.
fn leading_number(input: &str) -> &str {
    let bytes = input.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut seen_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if seen_digits || frac_end > end + 1 {
            seen_digits = true;
            end = frac_end;
        }
    }
    if !seen_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &input[..end]
}

/// Gates the hero reveal on both the image and the CSS fade.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealGate {
    image_ready: bool,
    fade_ready: bool,
    revealed: bool,
}

impl RevealGate {
    pub fn new(image_ready: bool, fade_ready: bool) -> Self {
        Self {
            image_ready,
            fade_ready,
            revealed: false,
        }
    }

    pub fn image_ready(&mut self) -> bool {
        self.image_ready = true;
        self.try_reveal()
    }

    pub fn fade_ready(&mut self) -> bool {
        self.fade_ready = true;
        self.try_reveal()
    }

    /// True exactly once, the first time both conditions hold.
    pub fn try_reveal(&mut self) -> bool {
        if self.revealed || !(self.image_ready && self.fade_ready) {
            return false;
        }
        self.revealed = true;
        true
    }
}
