use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod narrative;
mod navigation;
mod pledge;
mod pages {
    pub mod home;
    pub mod ocean_rescue;
    pub mod pledge;
}

use navigation::NavBar;
use pages::{home::Home, ocean_rescue::OceanRescue, pledge::Pledge};

pub use navigation::Route;

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Pledge => html! { <Pledge /> },
        Route::Game => html! { <OceanRescue /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <BrowserRouter>
            <div class="app-shell">
                <NavBar />
                <main class="app-main">
                    <Switch<Route> render={switch} />
                </main>
                <footer class="app-footer">
                    <p>{"Campaign against textile waste."}</p>
                    <p>{format!("© {} #ReDressTheWorld. Ghana / Global South.", year)}</p>
                </footer>
            </div>
            <style>
            {r#"
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    background: #f8fafc;
    color: #1e293b;
}
.app-shell { min-height: 100vh; display: flex; flex-direction: column; }
.app-main { flex-grow: 1; }
.app-footer {
    background: #f1f5f9;
    border-top: 1px solid #e2e8f0;
    padding: 2rem 1rem;
    text-align: center;
    color: #64748b;
    font-size: 0.875rem;
}
.app-footer p { margin: 0 0 0.5rem; }
            "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    log::info!("starting #ReDressTheWorld");
    yew::Renderer::<App>::new().render();
}
