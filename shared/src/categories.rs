use crate::MovementKind;
use serde::{Deserialize, Serialize};

/// Category injected by the host page in the `categoriasDados` global
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub bucket: CategoryBucket,
}

/// Taxonomy bucket a category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryBucket {
    Entrada,
    Saida,
    Cartao,
}

impl CategoryBucket {
    pub fn code(self) -> &'static str {
        match self {
            Self::Entrada => "ENTRADA",
            Self::Saida => "SAIDA",
            Self::Cartao => "CARTAO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Entrada => "Entrada",
            Self::Saida => "Saída",
            Self::Cartao => "Cartão",
        }
    }
}

impl MovementKind {
    /// Which categories a transaction of this type may use
    pub fn category_bucket(self) -> CategoryBucket {
        match self {
            Self::Dinheiro => CategoryBucket::Entrada,
            Self::Cartao => CategoryBucket::Cartao,
            Self::Registro | Self::Saida => CategoryBucket::Saida,
        }
    }
}

pub const PLACEHOLDER_CHOOSE_TYPE: &str = "← Escolha o tipo antes";
pub const PLACEHOLDER_NO_CATEGORY: &str = "--- Nenhuma categoria encontrada ---";
pub const PLACEHOLDER_SELECT: &str = "--- Selecione a Categoria ---";

/// What the dependent category `<select>` should offer
#[derive(Debug, Clone, PartialEq)]
pub enum CategorySelect<'a> {
    /// No transaction type chosen yet; the select is disabled
    AwaitingType,
    /// The bucket has no categories
    NoCategories,
    Options {
        options: Vec<&'a Category>,
        selected: Option<i64>,
    },
}

impl CategorySelect<'_> {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::AwaitingType)
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::AwaitingType => PLACEHOLDER_CHOOSE_TYPE,
            Self::NoCategories => PLACEHOLDER_NO_CATEGORY,
            Self::Options { .. } => PLACEHOLDER_SELECT,
        }
    }

    pub fn options(&self) -> &[&Category] {
        match self {
            Self::Options { options, .. } => options,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<i64> {
        match self {
            Self::Options { selected, .. } => *selected,
            _ => None,
        }
    }
}

pub fn categories_in(categories: &[Category], bucket: CategoryBucket) -> Vec<&Category> {
    categories.iter().filter(|c| c.bucket == bucket).collect()
}

/// Build the category select for the chosen type. A previous selection is
/// kept only if it belongs to the type's bucket.
pub fn category_select(
    categories: &[Category],
    kind: Option<MovementKind>,
    selected: Option<i64>,
) -> CategorySelect<'_> {
    let Some(kind) = kind else {
        return CategorySelect::AwaitingType;
    };

    let options = categories_in(categories, kind.category_bucket());
    if options.is_empty() {
        return CategorySelect::NoCategories;
    }

    let selected = selected.filter(|id| options.iter().any(|c| c.id == *id));
    CategorySelect::Options { options, selected }
}

/// Selection that survives switching to `kind`
pub fn retain_selection(
    categories: &[Category],
    kind: Option<MovementKind>,
    selected: Option<i64>,
) -> Option<i64> {
    category_select(categories, kind, selected).selected()
}

/// Filter of the category browsing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(CategoryBucket),
}

impl CategoryFilter {
    pub const BUTTONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(CategoryBucket::Entrada),
        CategoryFilter::Only(CategoryBucket::Saida),
        CategoryFilter::Only(CategoryBucket::Cartao),
    ];

    /// Value of the button's `data-filter` attribute
    pub fn code(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(bucket) => bucket.code(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todas",
            Self::Only(CategoryBucket::Entrada) => "Entradas",
            Self::Only(CategoryBucket::Saida) => "Saídas",
            Self::Only(CategoryBucket::Cartao) => "Cartão",
        }
    }

    /// Equality check of a card's `data-type` against this filter
    pub fn matches(self, data_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(bucket) => bucket.code() == data_type,
        }
    }
}
