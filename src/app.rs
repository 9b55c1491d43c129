use yew::prelude::*;

use crate::app_runtime;
use crate::storefront::Storefront;
use crate::tutorial::RestrictedTutorial;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let context = use_memo((), |_| app_runtime::boot_context());
    let config = context.config.clone();
    let environment = context.environment;
    if environment.is_restricted() {
        html! { <RestrictedTutorial {config} /> }
    } else {
        html! { <Storefront {config} {environment} /> }
    }
}
