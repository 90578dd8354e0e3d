use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// View configuration read from the mount element's `data-config` attribute.
///
/// Every field has a default, so a host page only states what differs from
/// the current layout. Path templates use `{data}` for the day and `{id}` for
/// a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Origin of the read endpoint; empty means the page's own origin
    pub api_base_url: String,
    /// Read endpoint of a day snapshot
    pub api_path: String,
    /// Browser path of a day, pushed to history after a load
    pub day_path: String,
    /// Action of the balances form
    pub balances_action: String,
    /// Action of the closed-day toggle form
    pub toggle_action: String,
    /// Target of the floating "new movement" button
    pub new_movement_path: String,
    pub category_edit_path: String,

    /// Movement cards expand inline to show description and actions
    pub expand_descriptions: bool,
    pub skip_day_toggle: bool,
    pub show_formula: bool,

    /// Delay before the closing balance auto-saves on blur
    pub autosave_delay_ms: u32,
    /// Delay before the closed-day toggle submits its form
    pub toggle_submit_delay_ms: u32,

    /// Emit debug-level console logs
    pub debug: bool,

    pub menu_links: Vec<MenuLink>,
    pub type_choices: Vec<TypeChoice>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            api_path: "/api/dados/{data}/".to_string(),
            day_path: "/caixa/{data}/".to_string(),
            balances_action: "/caixa/{data}/".to_string(),
            toggle_action: "/caixa/{data}/fechar/".to_string(),
            new_movement_path: "/movimentacao/salvar/{data}/".to_string(),
            category_edit_path: "/categorias/{id}/editar/".to_string(),
            expand_descriptions: true,
            skip_day_toggle: true,
            show_formula: true,
            autosave_delay_ms: 200,
            toggle_submit_delay_ms: 300,
            debug: false,
            menu_links: vec![
                MenuLink::new("Caixa diário", "/", "fas fa-cash-register"),
                MenuLink::new("Categorias", "/categorias/", "fas fa-tags"),
                MenuLink::new("Sair", "/accounts/logout/", "fas fa-right-from-bracket"),
            ],
            type_choices: vec![
                TypeChoice::new("CARTAO", "Vendas no Cartão/Pix"),
                TypeChoice::new("DINHEIRO", "Entrada em Dinheiro"),
                TypeChoice::new("SAIDA", "Saídas em Dinheiro"),
                TypeChoice::new("REGISTRO", "Registro"),
            ],
        }
    }
}

impl ViewConfig {
    /// Layout before the `/caixa/` prefix and the closed-day toggle existed
    pub fn legacy() -> Self {
        Self {
            day_path: "/{data}/".to_string(),
            balances_action: "/{data}/".to_string(),
            expand_descriptions: false,
            skip_day_toggle: false,
            ..Self::default()
        }
    }

    /// Parse a `data-config` object. `"layout": "legacy"` starts from the
    /// older layout instead of the current one; every other key overrides
    /// the starting point.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut overrides: Map<String, Value> = serde_json::from_str(json)?;
        let base = match overrides.remove("layout").as_ref().and_then(Value::as_str) {
            Some("legacy") => Self::legacy(),
            _ => Self::default(),
        };

        let mut merged = match serde_json::to_value(base)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        merged.extend(overrides);
        serde_json::from_value(Value::Object(merged))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl MenuLink {
    pub fn new(label: &str, href: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            icon: Some(icon.to_string()),
        }
    }
}

/// One option of the transaction type `<select>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChoice {
    pub value: String,
    pub label: String,
}

impl TypeChoice {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ViewConfig =
            serde_json::from_str(r#"{"day_path": "/{data}/", "skip_day_toggle": false}"#).unwrap();

        assert_eq!(config.day_path, "/{data}/");
        assert!(!config.skip_day_toggle);
        assert_eq!(config.api_path, "/api/dados/{data}/");
        assert_eq!(config.autosave_delay_ms, 200);
        assert_eq!(config.type_choices.len(), 4);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: ViewConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ViewConfig::default());
    }

    #[test]
    fn test_legacy_layout() {
        let config = ViewConfig::legacy();
        assert_eq!(config.day_path, "/{data}/");
        assert!(!config.expand_descriptions);
        assert!(!config.skip_day_toggle);
        assert!(config.show_formula);
    }

    #[test]
    fn test_layout_key_selects_legacy_base() {
        let config = ViewConfig::from_json(r#"{"layout": "legacy", "show_formula": false}"#).unwrap();

        assert_eq!(config.day_path, "/{data}/");
        assert!(!config.skip_day_toggle);
        assert!(!config.expand_descriptions);
        assert!(!config.show_formula);
    }

    #[test]
    fn test_layout_overrides_still_apply() {
        let config = ViewConfig::from_json(r#"{"layout": "legacy", "day_path": "/dia/{data}/"}"#).unwrap();
        assert_eq!(config.day_path, "/dia/{data}/");
        assert_eq!(config.balances_action, "/{data}/");
    }

    #[test]
    fn test_without_layout_key_uses_current_layout() {
        assert_eq!(ViewConfig::from_json("{}").unwrap(), ViewConfig::default());
        assert_eq!(
            ViewConfig::from_json(r#"{"layout": "atual"}"#).unwrap(),
            ViewConfig::default()
        );
        assert!(ViewConfig::from_json("[]").is_err());
    }
}
