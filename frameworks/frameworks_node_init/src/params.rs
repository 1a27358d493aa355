//! Parameter Interaction
//!
//! Options that imply defaults for other options. Each rule only fills in a
//! value the user did not set, and logs when it does.

use tracing::info;

use crate::settings::Settings;

/// Apply the parameter interaction rules in order
pub fn apply_interactions(settings: &mut Settings) {
    if settings.is_set("-bind") && settings.soft_set_bool_arg("-listen", true) {
        info!("-bind set -> setting -listen=1");
    }

    if settings.is_set("-connect") && !settings.get_multi("-connect").is_empty() {
        // only connect to the given peers
        if settings.soft_set_bool_arg("-dnsseed", false) {
            info!("-connect set -> setting -dnsseed=0");
        }
        if settings.soft_set_bool_arg("-listen", false) {
            info!("-connect set -> setting -listen=0");
        }
    }

    if settings.is_set("-proxy") && settings.soft_set_bool_arg("-listen", false) {
        info!("-proxy set -> setting -listen=0");
    }

    if !settings.get_bool_arg("-listen", true) {
        if settings.soft_set_bool_arg("-upnp", false) {
            info!("-listen=0 -> setting -upnp=0");
        }
        if settings.soft_set_bool_arg("-discover", false) {
            info!("-listen=0 -> setting -discover=0");
        }
    }

    if settings.is_set("-externalip") && settings.soft_set_bool_arg("-discover", false) {
        info!("-externalip set -> setting -discover=0");
    }

    if settings.get_bool_arg("-salvagewallet", false) && settings.soft_set_bool_arg("-rescan", true)
    {
        info!("-salvagewallet=1 -> setting -rescan=1");
    }

    if settings.get_bool_arg("-zapwallettxes", false) && settings.soft_set_bool_arg("-rescan", true)
    {
        info!("-zapwallettxes=1 -> setting -rescan=1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(params: &[&str]) -> Settings {
        let mut settings = Settings::parse_parameters(params);
        apply_interactions(&mut settings);
        settings
    }

    #[test]
    fn test_no_options_sets_nothing() {
        assert_eq!(applied(&[]), Settings::new());
    }

    #[test]
    fn test_bind_enables_listen() {
        let settings = applied(&["-bind=127.0.0.1"]);
        assert_eq!(settings.get("-listen"), Some("1"));
        assert!(!settings.is_set("-upnp"));
    }

    #[test]
    fn test_connect_disables_listen_chain() {
        let settings = applied(&["-connect=10.0.0.1"]);
        assert_eq!(settings.get("-dnsseed"), Some("0"));
        assert_eq!(settings.get("-listen"), Some("0"));
        assert_eq!(settings.get("-upnp"), Some("0"));
        assert_eq!(settings.get("-discover"), Some("0"));
    }

    #[test]
    fn test_bind_wins_over_connect() {
        let settings = applied(&["-bind=127.0.0.1", "-connect=10.0.0.1"]);
        assert_eq!(settings.get("-listen"), Some("1"));
        assert_eq!(settings.get("-dnsseed"), Some("0"));
        assert!(!settings.is_set("-upnp"));
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let settings = applied(&["-proxy=127.0.0.1:9050", "-listen=1", "-upnp=1"]);
        assert_eq!(settings.get("-listen"), Some("1"));
        assert_eq!(settings.get("-upnp"), Some("1"));
    }

    #[test]
    fn test_externalip_and_wallet_rules() {
        let settings = applied(&["-externalip=1.2.3.4", "-zapwallettxes"]);
        assert_eq!(settings.get("-discover"), Some("0"));
        assert_eq!(settings.get("-rescan"), Some("1"));

        let settings = applied(&["-salvagewallet=1", "-rescan=0"]);
        assert_eq!(settings.get("-rescan"), Some("0"));
    }
}
