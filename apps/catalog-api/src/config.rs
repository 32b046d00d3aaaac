use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use domain_products::UpdatePolicy;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub product_update_policy: UpdatePolicy,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        // Which fields a product edit applies; defaults to the historical
        // name/description-only behavior.
        let raw = env_or_default("PRODUCT_UPDATE_POLICY", "name_description");
        let product_update_policy = raw
            .parse()
            .map_err(|_| eyre::eyre!("Invalid PRODUCT_UPDATE_POLICY value: {raw}"))?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            product_update_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_policy_defaults_to_name_description() {
        temp_env::with_var_unset("PRODUCT_UPDATE_POLICY", || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.product_update_policy, UpdatePolicy::NameDescription);
        });
    }

    #[test]
    fn test_update_policy_all_fields_from_env() {
        temp_env::with_var("PRODUCT_UPDATE_POLICY", Some("all_fields"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.product_update_policy, UpdatePolicy::AllFields);
        });
    }

    #[test]
    fn test_update_policy_rejects_unknown_value() {
        temp_env::with_var("PRODUCT_UPDATE_POLICY", Some("everything"), || {
            let result = Config::from_env();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("PRODUCT_UPDATE_POLICY"));
        });
    }
}
