use yew::prelude::*;
use yew_router::prelude::*;

use keywarden_frontend::l10n::L10nProvider;
use keywarden_frontend::pages::items::ItemsPage;
use keywarden_frontend::theme::{self, ThemeProvider};

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Items,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Items => html! { <ItemsPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center" style="background-color: var(--bg-primary);">
                <div class="text-center">
                    <h1 class="text-6xl font-bold" style="color: var(--fg-primary);">{"404"}</h1>
                    <p class="text-xl mt-4" style="color: var(--fg-muted);">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <L10nProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </L10nProvider>
        </ThemeProvider>
    }
}

fn main() {
    let document = web_sys::window().unwrap().document().unwrap();
    let head = document.head().unwrap();

    // Load Tailwind CSS
    let tailwind = document.create_element("link").unwrap();
    tailwind.set_attribute("href", "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css").unwrap();
    tailwind.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&tailwind).unwrap();

    // Load Inter for UI text and JetBrains Mono for password display
    let fonts = document.create_element("link").unwrap();
    fonts.set_attribute("href", "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=JetBrains+Mono:wght@400;500;600&display=swap").unwrap();
    fonts.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&fonts).unwrap();

    // Load the palette variables
    let theme_css = document.create_element("link").unwrap();
    theme_css.set_attribute("href", "/static/themes.css").unwrap();
    theme_css.set_attribute("rel", "stylesheet").unwrap();
    head.append_child(&theme_css).unwrap();

    // Apply initial theme
    theme::apply_theme(theme::load_theme());

    yew::Renderer::<App>::new().render();
}
