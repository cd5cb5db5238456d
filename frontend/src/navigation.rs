use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pledge")]
    Pledge,
    #[at("/ocean-rescue")]
    Game,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Unknown paths show the home view, so they light up its nav link too.
    pub fn view(&self) -> Route {
        match self {
            Route::NotFound => Route::Home,
            other => *other,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "The Crisis", route: Route::Home },
    NavLink { label: "Take Action", route: Route::Pledge },
    NavLink { label: "Ocean Rescue", route: Route::Game },
];

impl NavLink {
    pub fn is_active(&self, current: Option<&Route>) -> bool {
        current.map(Route::view).as_ref() == Some(&self.route)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MenuState {
    pub open: bool,
    seen_route: Option<Route>,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self {
            open: !self.open,
            ..self
        }
    }

    /// Every navigation collapses the mobile menu.
    pub fn after_navigation(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }

    /// Records the current route; a change means someone navigated, from the
    /// nav bar or from a page button, so the menu closes.
    pub fn observe_route(self, current: Option<Route>) -> Self {
        if current == self.seen_route {
            self
        } else {
            Self {
                open: false,
                seen_route: current,
            }
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Callback that switches to a view and scrolls back to the top. Any view can
/// be reached from any other.
#[hook]
pub fn use_navigate_to() -> Callback<Route> {
    let navigator = use_navigator();
    Callback::from(move |route: Route| {
        log::debug!("navigating to {:?}", route);
        if let Some(navigator) = &navigator {
            navigator.push(&route);
        }
        scroll_to_top();
    })
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu = use_state(MenuState::default);
    let current = use_route::<Route>();
    let navigate_to = use_navigate_to();

    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |current| {
                menu.set(menu.observe_route(*current));
                || ()
            },
            current,
        );
    }

    let go = {
        let menu = menu.clone();
        move |route: Route| {
            let menu = menu.clone();
            let navigate_to = navigate_to.clone();
            Callback::from(move |_: MouseEvent| {
                menu.set(menu.after_navigation());
                navigate_to.emit(route);
            })
        }
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    html! {
        <nav class="top-nav">
            <div class="top-nav-inner">
                <div class="nav-logo" onclick={go(Route::Home)}>
                    <span class="nav-logo-icon">{"⚠"}</span>
                    <span>{"#ReDress"}<span class="nav-logo-accent">{"TheWorld"}</span></span>
                </div>
                <div class="nav-links desktop-only">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button
                            class={classes!("nav-link", link.is_active(current.as_ref()).then_some("active"))}
                            onclick={go(link.route)}
                        >
                            {link.label}
                        </button>
                    }) }
                </div>
                <button class="menu-toggle mobile-only" onclick={toggle_menu}>
                    { if menu.open { "✕" } else { "☰" } }
                </button>
            </div>
            if menu.open {
                <div class="mobile-menu mobile-only">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button class="mobile-menu-link" onclick={go(link.route)}>
                            {link.label}
                        </button>
                    }) }
                </div>
            }
            <style>
            {r#"
.top-nav {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid #e2e8f0;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}
.top-nav-inner {
    max-width: 56rem;
    margin: 0 auto;
    padding: 0.75rem 1rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 900;
    font-size: 1.25rem;
    letter-spacing: -0.05em;
    color: #1d4ed8;
    cursor: pointer;
}
.nav-logo-icon { color: #f43f5e; }
.nav-logo-accent { color: #1e3a8a; }
.nav-links {
    display: flex;
    gap: 1.5rem;
}
.nav-link,
.mobile-menu-link {
    background: none;
    border: none;
    font-weight: 700;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: #64748b;
    cursor: pointer;
    transition: color 0.2s;
}
.nav-link:hover,
.mobile-menu-link:hover { color: #f43f5e; }
.nav-link.active { color: #2563eb; }
.menu-toggle {
    background: none;
    border: none;
    font-size: 1.5rem;
    padding: 0.5rem;
    color: #475569;
    cursor: pointer;
}
.mobile-menu {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem;
    border-bottom: 1px solid #f1f5f9;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.mobile-menu-link { text-align: left; padding: 0.5rem 0; }
.mobile-only { display: none; }
@media (max-width: 768px) {
    .desktop-only { display: none; }
    .mobile-only { display: block; }
    .mobile-menu.mobile-only { display: flex; }
}
            "#}
            </style>
        </nav>
    }
}
