pub const APP_NAME: &str = "Calculadora IPTU";
pub const APP_SUBTITLE: &str = "Planta Genérica de Valores - Marcolândia/PI";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Tag from `git describe` when built from a tagged checkout, otherwise the crate version.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_never_empty() {
        let label = version_label();
        assert!(label.starts_with('v') || GIT_TAG.is_some());
        assert!(label.len() > 1);
    }
}
