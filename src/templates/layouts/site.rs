use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const SITE_NAME: &str = "Jeremy Kopp Real Estate";

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #262626; background: #fafafa; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
header { background: #fff; border-bottom: 1px solid #e5e5e5; }
header .bar { max-width: 72rem; margin: 0 auto; padding: 1.5rem 1rem; display: flex; align-items: center; justify-content: space-between; }
header .brand { font-size: 1.5rem; font-weight: 700; color: inherit; text-decoration: none; }
nav ul { list-style: none; display: flex; gap: 1.5rem; margin: 0; padding: 0; }
nav a { color: inherit; text-decoration: none; }
footer { background: #262626; color: #d4d4d4; margin-top: 4rem; }
footer .cols { max-width: 72rem; margin: 0 auto; padding: 3rem 1rem; display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
footer a { color: #d4d4d4; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.card, .listing-card { background: #fff; border: 1px solid #e5e5e5; border-radius: 0.5rem; padding: 1rem; }
.listing-card a { color: inherit; text-decoration: none; }
.listing-card img { width: 100%; height: 12rem; object-fit: cover; border-radius: 0.25rem; }
.status { font-size: 0.75rem; padding: 0.125rem 0.5rem; border-radius: 999px; }
.status-sale { background: #dcfce7; color: #166534; }
.status-sold { background: #f3f4f6; color: #1f2937; }
.status-other { background: #fef9c3; color: #854d0e; }
.notice { background: #fefce8; border-left: 4px solid #facc15; padding: 1rem; margin: 1rem 0; }
.notice.error { background: #fef2f2; border-color: #f87171; }
.notice.success { background: #f0fdf4; border-color: #4ade80; }
.filters { display: flex; flex-wrap: wrap; gap: 1rem; align-items: end; margin-bottom: 1.5rem; }
.filters label, .contact-form label { display: flex; flex-direction: column; font-size: 0.875rem; gap: 0.25rem; }
.contact-form { display: grid; gap: 1rem; max-width: 40rem; }
.btn { background: #1d4ed8; color: #fff; border: 0; border-radius: 0.375rem; padding: 0.6rem 1.2rem; text-decoration: none; cursor: pointer; }
.muted { color: #737373; }
"#;

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(STYLES)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header {
                    div class="bar" {
                        a href="/" class="brand" { "Jeremy Kopp" }
                        nav {
                            ul {
                                li { a href="/listings" { "Listings" } }
                                li { a href="/blog" { "Blog" } }
                                li { a href="/contact" { "Contact" } }
                                li { a href="/about" { "About" } }
                            }
                        }
                    }
                }
                main { (content) }
                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer {
            div class="cols" {
                div { h3 { (SITE_NAME) } }
                div {
                    h4 { "Explore" }
                    ul {
                        li { a href="/listings" { "Listings" } }
                        li { a href="/blog" { "Blog" } }
                    }
                }
                div {
                    h4 { "Company" }
                    ul {
                        li { a href="/about" { "About" } }
                        li { a href="/contact" { "Contact" } }
                    }
                }
            }
        }
    }
}
