use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Accra Rentals" }
                style { (STYLES) }
            }
            body {
                header class="topbar" {
                    a class="brand" href="/" { "🏠 Accra Rentals" }
                    nav {
                        ul {
                            li { a href="/" { "Estimator" } }
                            li { a href="/market" { "Market" } }
                            li { a href="/compare" { "Compare" } }
                            li { a href="/searches" { "Saved" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer {
                    p { "Rental price intelligence for Greater Accra, from real scraped listings." }
                }
            }
        }
    }
}

// Kept inline so the binary has no static-file directory to ship.
const STYLES: &str = "
body { font-family: system-ui, sans-serif; margin: 0; color: #262626; }
.topbar { display: flex; align-items: center; justify-content: space-between;
          padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.brand { font-weight: 700; text-decoration: none; color: #171717; }
nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
nav a { text-decoration: none; color: #404040; }
.container { max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }
.card { border: 1px solid #e5e5e5; border-radius: 12px; padding: 1.25rem;
        margin-bottom: 1.25rem; }
.card h2, .card h3 { margin-top: 0; }
.price-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.price-box { border: 1px solid #e5e5e5; border-radius: 8px; padding: 1rem;
             text-align: center; }
.price-box.average { background: #ef4444; color: white; }
.price-label { font-size: 0.8rem; color: #737373; }
.average .price-label { color: rgba(255,255,255,0.8); }
.price-value { font-size: 1.5rem; font-weight: 700; }
.rec-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #e5e5e5; }
form.inline { display: inline; }
.muted { color: #737373; font-size: 0.85rem; }
.share-box { width: 100%; font-family: monospace; padding: 0.4rem; }
";
