use gloo_timers::future::sleep;
use log::debug;
use sycamore::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::{
    config::Config,
    game::{Game, GameContext},
};

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum ActivePage {
    Landing,
    Game,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Fade {
    In,
    Out,
}

impl Fade {
    pub fn class(self) -> &'static str {
        match self {
            Fade::In => "view fade-in",
            Fade::Out => "view fade-out",
        }
    }
}

/// Switches between the landing and the game view with a cross-fade.
#[derive(Clone)]
pub struct Navigator {
    pub page: RcSignal<ActivePage>,
    pub fade: RcSignal<Fade>,
}

impl Navigator {
    pub fn new(page: ActivePage) -> Self {
        Navigator {
            page: create_rc_signal(page),
            fade: create_rc_signal(Fade::In),
        }
    }

    /// Starts fading out the current view.
    pub fn begin(&self, to: ActivePage) {
        debug!("navigating to {to:?}");
        self.fade.set(Fade::Out);
    }

    /// Shows `to` and fades it in. Returns whether the page actually changed,
    /// only then is the view mounted again.
    pub fn finish(&self, to: ActivePage) -> bool {
        let changed = *self.page.get_untracked() != to;
        if changed {
            self.page.set(to);
        }
        self.fade.set(Fade::In);
        changed
    }

    pub fn navigate(&self, config: &Config, to: ActivePage) {
        self.begin(to);
        let this = self.clone();
        let fade = config.fade;
        spawn_local(async move {
            sleep(fade).await;
            this.finish(to);
        });
    }
}

#[component]
pub fn Landing<G: Html>(cx: Scope) -> View<G> {
    let navigator = use_context::<Navigator>(cx);
    let config = use_context::<Config>(cx);

    view! { cx,
        div(id="landing", class="landing"){
            h1(class="title"){ "Chess" }
            button(id="play-btn", class="btn btn-primary", on:click=move |_| navigator.navigate(config, ActivePage::Game)){ "Play" }
        }
    }
}

#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    let navigator = provide_context(cx, Navigator::new(ActivePage::Landing));
    provide_context(cx, GameContext::new());

    view! { cx,
        div(class=navigator.fade.get().class()){
            (match *navigator.page.get() {
                ActivePage::Landing => view! { cx, Landing {} },
                ActivePage::Game => view! { cx, Game {} },
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn play_then_back() {
        let nav = Navigator::new(ActivePage::Landing);

        nav.begin(ActivePage::Game);
        assert_eq!(*nav.fade.get_untracked(), Fade::Out);
        assert_eq!(*nav.page.get_untracked(), ActivePage::Landing);

        assert!(nav.finish(ActivePage::Game));
        assert_eq!(*nav.page.get_untracked(), ActivePage::Game);
        assert_eq!(*nav.fade.get_untracked(), Fade::In);

        nav.begin(ActivePage::Landing);
        assert!(nav.finish(ActivePage::Landing));
        assert_eq!(*nav.page.get_untracked(), ActivePage::Landing);
    }

    #[test]
    fn one_mount_per_transition() {
        let nav = Navigator::new(ActivePage::Landing);
        let mounts = create_rc_signal(0);
        {
            let mounts = mounts.clone();
            let page = nav.page.clone();
            // Never disposed, the root scope outlives the test.
            let _ = create_scope(move |cx| {
                create_effect(cx, move || {
                    if *page.get() == ActivePage::Game {
                        mounts.set(*mounts.get_untracked() + 1);
                    }
                });
            });
        }

        nav.begin(ActivePage::Game);
        nav.begin(ActivePage::Game);
        assert!(nav.finish(ActivePage::Game));
        assert!(!nav.finish(ActivePage::Game));
        assert_eq!(*mounts.get_untracked(), 1);

        nav.begin(ActivePage::Landing);
        assert!(nav.finish(ActivePage::Landing));
        nav.begin(ActivePage::Game);
        assert!(nav.finish(ActivePage::Game));
        assert_eq!(*mounts.get_untracked(), 2);
    }

    #[test]
    fn fade_classes() {
        assert_eq!(Fade::In.class(), "view fade-in");
        assert_eq!(Fade::Out.class(), "view fade-out");
    }

    #[test]
    fn starts_on_landing() {
        let html = sycamore::render_to_string(|cx| {
            provide_context(cx, Config::default());
            view! { cx, App {} }
        });
        assert!(html.contains("play-btn"));
        assert!(html.contains("view fade-in"));
        assert!(!html.contains("chessboard"));
    }
}
