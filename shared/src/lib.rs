use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod categories;
pub mod config;
pub mod currency;
pub mod loading;
pub mod presentation;
pub mod routes;
pub mod submit;

pub use categories::{Category, CategoryBucket, CategoryFilter, CategorySelect};
pub use config::{MenuLink, TypeChoice, ViewConfig};
pub use loading::{LoadState, LoadTicket, LoadTracker, Settlement};
pub use presentation::MovementPresentation;
pub use submit::{CleanValue, MaskedField, SubmitGuard};

/// One calendar day of the cash register, as returned by `GET /api/dados/{date}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// Canonical identifier of the day (YYYY-MM-DD), used as router key
    #[serde(rename = "data_iso")]
    pub date: NaiveDate,
    /// Human-readable label for the header (e.g. "Sexta, 10 de Janeiro")
    #[serde(rename = "data_formatada")]
    pub formatted_date: String,
    pub nav: DayNavigation,
    /// Whether the day is marked as closed/skipped. Older payloads omit it.
    #[serde(rename = "loja_fechada", default)]
    pub store_closed: bool,
    #[serde(rename = "saldos")]
    pub balances: Balances,
    #[serde(rename = "totais")]
    pub totals: Totals,
    /// Ledger entries in server order; never re-sorted on the client
    #[serde(rename = "movimentacoes", default)]
    pub movements: Vec<Movement>,
}

/// Adjacent days for previous/next navigation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayNavigation {
    #[serde(rename = "anterior")]
    pub previous: NaiveDate,
    #[serde(rename = "proximo")]
    pub next: NaiveDate,
}

/// Opening and closing physical cash balance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Balances {
    #[serde(rename = "inicial", deserialize_with = "decimal::deserialize", default)]
    pub opening: f64,
    #[serde(rename = "final", deserialize_with = "decimal::deserialize", default)]
    pub closing: f64,
}

/// Summary figures computed server-side
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Card/Pix sales
    #[serde(rename = "cartao", deserialize_with = "decimal::deserialize", default)]
    pub card: f64,
    /// Specific cash entries (suprimentos)
    #[serde(rename = "entradas_esp", deserialize_with = "decimal::deserialize", default)]
    pub cash_in: f64,
    /// Small cash sales, derived by difference
    #[serde(rename = "dinheiro_miudo", deserialize_with = "decimal::deserialize", default)]
    pub small_cash: f64,
    #[serde(rename = "geral", deserialize_with = "decimal::deserialize", default)]
    pub overall: f64,
    /// Cash taken out of the register
    #[serde(rename = "retiradas", deserialize_with = "decimal::deserialize", default)]
    pub withdrawals: f64,
}

/// A single ledger entry within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Category label. Older payloads call it `nome`.
    #[serde(rename = "categoria", alias = "nome")]
    pub label: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: MovementKind,
    #[serde(rename = "valor", deserialize_with = "decimal::deserialize")]
    pub amount: f64,
    /// Edit target supplied by the server
    #[serde(rename = "url_editar")]
    pub edit_url: String,
    /// Delete target supplied by the server
    #[serde(rename = "url_deletar")]
    pub delete_url: String,
}

/// Type tag of a movement. Only selects display affordances, never arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementKind {
    /// Card/Pix sale
    Cartao,
    /// Cash brought into the register
    Dinheiro,
    /// Note-only record
    Registro,
    /// Cash out; also the fallback for any unknown tag
    #[serde(other)]
    Saida,
}

impl MovementKind {
    /// Parse the value of a type `<select>`. An empty value means "no type chosen".
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "" => None,
            "CARTAO" => Some(Self::Cartao),
            "DINHEIRO" => Some(Self::Dinheiro),
            "REGISTRO" => Some(Self::Registro),
            _ => Some(Self::Saida),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Cartao => "CARTAO",
            Self::Dinheiro => "DINHEIRO",
            Self::Registro => "REGISTRO",
            Self::Saida => "SAIDA",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Decimal fields arrive as JSON numbers or, from Django's encoder, as strings.
mod decimal {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(value) => Ok(value),
            NumberOrText::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|e| de::Error::custom(format!("invalid decimal {text:?}: {e}"))),
        }
    }
}
