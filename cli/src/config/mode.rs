/// Dynamic value source of a parameter, declared as `<source>:<argument>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Env(String),
    Faker(String),
}

impl Mode {
    /// An empty mode string means "no dynamic source".
    pub fn parse(raw: &str) -> Result<Option<Mode>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(format!(
                "mode '{raw}' must have the form <source>:<argument>"
            ));
        }

        match parts[0] {
            "env" => Ok(Some(Mode::Env(parts[1].to_string()))),
            "faker" => Ok(Some(Mode::Faker(parts[1].to_string()))),
            other => Err(format!(
                "unknown mode source '{other}' (expected env or faker)"
            )),
        }
    }
}
