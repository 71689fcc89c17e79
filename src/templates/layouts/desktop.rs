use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLESHEET: &str = "
body { margin: 0; font-family: system-ui, sans-serif; color: #1f2937; }
header { display: flex; align-items: center; gap: 12px; padding: 12px 24px; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
header h3 { margin: 0; }
header nav ul { display: flex; gap: 16px; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 1100px; margin: 0 auto; padding: 24px; }
.columns { display: flex; gap: 32px; flex-wrap: wrap; }
.columns > section { flex: 1 1 400px; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; margin-bottom: 16px; }
.metric-row { display: flex; gap: 24px; margin: 16px 0; }
.metric { flex: 1; }
.metric-label { display: block; font-size: 0.85em; color: #6b7280; }
.metric-value { font-size: 1.6em; font-weight: 600; }
.metric-error { color: #dc2626; }
figure.chart { margin: 16px 0 0 0; }
figure.chart figcaption { font-weight: 600; margin-bottom: 8px; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#3c8a5d"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="icon icon-tabler icon-tabler-home"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Rental Advisor" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
