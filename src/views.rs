use yew::prelude::*;

use vitrine_core::{BRAND, HERO_IMAGE};

#[derive(Properties, PartialEq)]
pub(crate) struct RedirectProps {
    pub(crate) on_redirect: Callback<()>,
}

fn redirect_click(on_redirect: &Callback<()>) -> Callback<MouseEvent> {
    on_redirect.reform(|_: MouseEvent| ())
}

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <span class="brand">{BRAND}</span>
            <ul class="nav-links">
                <li>{"Início"}</li>
                <li>{"Séries"}</li>
                <li>{"Filmes"}</li>
                <li>{"Bombando"}</li>
            </ul>
        </nav>
    }
}

#[function_component(Hero)]
pub(crate) fn hero(props: &RedirectProps) -> Html {
    let onclick = redirect_click(&props.on_redirect);
    html! {
        <div class="hero">
            <img class="hero-image" src={HERO_IMAGE} alt="Hero Background" />
            <div class="hero-shade" />
            <div class="hero-content">
                <span class="hero-badge">{"TOP 1 NO BRASIL"}</span>
                <h1>{"ACESSO EXCLUSIVO "}<span class="accent">{"VIP"}</span></h1>
                <p>
                    {"Assista aos melhores conteúdos que não estão disponíveis em nenhum outro lugar. "}
                    {"Entre agora no nosso canal privado e tenha acesso imediato."}
                </p>
                <div class="hero-actions">
                    <button class="btn btn-play" onclick={onclick.clone()}>{"▶ Assistir Agora"}</button>
                    <button class="btn btn-info" {onclick}>{"ⓘ Mais Informações"}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(Footer)]
pub(crate) fn footer(props: &RedirectProps) -> Html {
    html! {
        <footer class="footer">
            <div class="footer-link" onclick={redirect_click(&props.on_redirect)}>
                {"Acessar Canal Oficial ↗"}
            </div>
            <p>{format!("© 2024 {BRAND}. Todos os direitos reservados.")}</p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RevealModalProps {
    pub(crate) on_redirect: Callback<()>,
    pub(crate) on_dismiss: Callback<()>,
}

#[function_component(RevealModal)]
pub(crate) fn reveal_modal(props: &RevealModalProps) -> Html {
    let on_close = props.on_dismiss.reform(|_: MouseEvent| ());
    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true">
                <button class="modal-close" aria-label="Fechar" onclick={on_close}>{"✕"}</button>
                <div class="modal-icon">{"!"}</div>
                <h2>{"Está esperando o quê?"}</h2>
                <p>
                    {"Você já está aqui há 15 segundos! O melhor conteúdo exclusivo está a um clique de distância."}
                </p>
                <button class="btn btn-cta" onclick={redirect_click(&props.on_redirect)}>
                    {"▶ VER CONTEÚDO AGORA"}
                </button>
            </div>
        </div>
    }
}
