use shared::currency::format_brl;
use shared::presentation::formula_text;
use shared::DaySnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub day: DaySnapshot,
    pub show_formula: bool,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let totals = &props.day.totals;

    html! {
        <section class="card-resumo">
            <div class="resumo-item">
                <span class="resumo-label">{"Cartão/Pix"}</span>
                <span id="val-cartao" class="resumo-valor">{format_brl(totals.card)}</span>
            </div>
            <div class="resumo-item">
                <span class="resumo-label">{"Suprimentos"}</span>
                <span id="val-entrada-esp" class="resumo-valor">{format_brl(totals.cash_in)}</span>
            </div>
            <div class="resumo-item">
                <span class="resumo-label">{"Dinheiro*"}</span>
                <span id="val-dinheiro-calc" class="resumo-valor">{format_brl(totals.small_cash)}</span>
            </div>
            <div class="resumo-item resumo-total">
                <span class="resumo-label">{"Total geral"}</span>
                <span id="val-geral" class="resumo-valor">{format_brl(totals.overall)}</span>
            </div>
            if props.show_formula {
                <small id="txt-formula" class="resumo-formula">{formula_text(&props.day)}</small>
            }
        </section>
    }
}
