use sycamore::prelude::*;

use crate::game::GameContext;

/// Shows the status text exactly as the server sent it.
#[component]
pub fn Status<G: Html>(cx: Scope) -> View<G> {
    let ctx = use_context::<GameContext>(cx);

    view! { cx,
        p(id="status", class="status"){ ((*ctx.status.get()).clone()) }
    }
}
