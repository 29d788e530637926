use crate::config::Rules;

/// Resolves `minLength`/`maxLength` against the generator's defaults. A single
/// bound outside the default range drags the other bound along.
pub fn length_range(rules: &Rules, default_min: usize, default_max: usize) -> Result<(usize, usize), String> {
    match (rules.min_length, rules.max_length) {
        (Some(min), Some(max)) if min > max => Err(format!(
            "minLength ({min}) is greater than maxLength ({max})"
        )),
        (Some(min), Some(max)) => Ok((min, max)),
        (Some(min), None) => Ok((min, default_max.max(min))),
        (None, Some(max)) => Ok((default_min.min(max), max)),
        (None, None) => Ok((default_min, default_max)),
    }
}

pub fn numeric_range(rules: &Rules, default_min: f64, default_max: f64) -> Result<(f64, f64), String> {
    let min = rules.min.unwrap_or(default_min.min(rules.max.unwrap_or(default_min)));
    let max = rules.max.unwrap_or(default_max.max(rules.min.unwrap_or(default_max)));
    if !min.is_finite() || !max.is_finite() {
        return Err("min and max must be finite numbers".to_string());
    }
    if min > max {
        return Err(format!("min ({min}) is greater than max ({max})"));
    }
    if !(max - min).is_finite() {
        return Err(format!("range from min ({min}) to max ({max}) is too wide"));
    }
    Ok((min, max))
}

pub fn positive_count(value: Option<usize>, field: &str) -> Result<Option<usize>, String> {
    match value {
        Some(0) => Err(format!("{field} must be at least 1")),
        other => Ok(other),
    }
}

pub fn dimensions(rules: &Rules, default_width: u32, default_height: u32) -> Result<(u32, u32), String> {
    let width = rules.width.unwrap_or(default_width);
    let height = rules.height.unwrap_or(default_height);
    if width == 0 || height == 0 {
        return Err("width and height must be at least 1".to_string());
    }
    Ok((width, height))
}
