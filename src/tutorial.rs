use std::rc::Rc;

use yew::prelude::*;

use vitrine_core::{SiteConfig, BRAND};

const STEPS: &[&str] = &[
    "Toque nos três pontinhos (•••) no canto superior direito da tela.",
    "Escolha \"Abrir no navegador\" (ou \"Abrir no Safari / Chrome\").",
    "Pronto! O site abre normalmente e você acessa o conteúdo completo.",
];

#[derive(Properties, PartialEq)]
pub(crate) struct RestrictedTutorialProps {
    pub(crate) config: Rc<SiteConfig>,
}

#[function_component(RestrictedTutorial)]
pub(crate) fn restricted_tutorial(props: &RestrictedTutorialProps) -> Html {
    let steps: Html = STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| {
            html! {
                <li key={index}>
                    <span class="step-number">{(index + 1).to_string()}</span>
                    <span>{*step}</span>
                </li>
            }
        })
        .collect();
    html! {
        <div class="tutorial">
            <span class="brand">{BRAND}</span>
            <h1>{"Abra no seu navegador"}</h1>
            <p>{"Este aplicativo não consegue exibir o conteúdo. Siga os passos abaixo:"}</p>
            <ol class="tutorial-steps">{steps}</ol>
            <a class="btn btn-cta" href={props.config.redirect_url.clone()} target="_blank" rel="noopener">
                {"Já abri no navegador"}
            </a>
        </div>
    }
}
