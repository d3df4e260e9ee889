use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub token_secret: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(token_secret: SecretString) -> Self {
        Self { token_secret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("sikreta".to_string()));
        assert_eq!(args.token_secret.expose_secret(), "sikreta");
    }

    #[test]
    fn test_global_args_debug_redacts_secret() {
        let args = GlobalArgs::new(SecretString::from("sikreta".to_string()));
        let debug = format!("{args:?}");
        assert!(!debug.contains("sikreta"));
    }
}
