use crate::currency::{format_brl, mask_amount};
use crate::{DaySnapshot, Movement, MovementKind};

/// Display affordances selected by a movement's type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementPresentation {
    pub css_class: &'static str,
    /// Font Awesome classes for the icon box
    pub icon: &'static str,
    pub subtitle: &'static str,
    /// Presentation convention only; the server owns the accounting
    pub sign: char,
}

impl MovementKind {
    pub fn presentation(self) -> MovementPresentation {
        match self {
            Self::Cartao => MovementPresentation {
                css_class: "tipo-cartao",
                icon: "fas fa-credit-card",
                subtitle: "Cartão/Pix",
                sign: '+',
            },
            Self::Dinheiro => MovementPresentation {
                css_class: "tipo-dinheiro",
                icon: "fas fa-coins",
                subtitle: "Suprimento",
                sign: '+',
            },
            Self::Registro => MovementPresentation {
                css_class: "tipo-registro",
                icon: "fas fa-file-alt",
                subtitle: "Registro",
                sign: '-',
            },
            Self::Saida => MovementPresentation {
                css_class: "tipo-saida",
                icon: "fas fa-arrow-down",
                subtitle: "Saída/Sangria",
                sign: '-',
            },
        }
    }
}

impl Movement {
    pub fn presentation(&self) -> MovementPresentation {
        self.kind.presentation()
    }

    /// Amount with its display sign, e.g. `+ R$ 42,50`
    pub fn signed_amount(&self) -> String {
        format!("{} {}", self.presentation().sign, format_brl(self.amount.abs()))
    }

    /// Free-text description, if the server sent a non-blank one
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

pub const NO_DESCRIPTION: &str = "Sem descrição";
pub const EMPTY_DAY_MESSAGE: &str = "Nenhuma movimentação hoje.";

/// Reconciliation line shown under the summary card:
/// (cash out + closing balance) - (opening balance + cash in)
pub fn formula_text(day: &DaySnapshot) -> String {
    format!(
        "*Dinheiro = ({} Saídas + {} Sobrou) - ({} Início + {} Suprimentos)",
        mask_amount(day.totals.withdrawals),
        mask_amount(day.balances.closing),
        mask_amount(day.balances.opening),
        mask_amount(day.totals.cash_in),
    )
}

pub fn document_title(day: &DaySnapshot) -> String {
    format!("Caixa - {}", day.formatted_date)
}

/// Label text and colour of the closed-day toggle
pub fn store_closed_label(closed: bool) -> (&'static str, &'static str) {
    if closed {
        ("Loja fechada neste dia", "#dc2626")
    } else {
        ("Loja aberta", "#16a34a")
    }
}
