use maud::{html, Markup, PreEscaped, DOCTYPE};

// Single inline stylesheet; the app has no static-file route.
const STYLESHEET: &str = r#"
    body {
        font-family: system-ui, sans-serif;
        background-color: #f5f7fa;
        margin: 0;
    }
    header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 12px 24px;
        background: white;
        box-shadow: 0 1px 4px rgba(0,0,0,0.1);
    }
    header h3 { color: #FF6B35; margin: 0; }
    header nav a { color: #2C3E50; text-decoration: none; margin-left: 16px; }
    main.container { max-width: 860px; margin: 0 auto; padding: 24px 16px; }
    h1 { color: #FF6B35; text-align: center; font-weight: 700; margin-bottom: 10px; }
    .subtitle { text-align: center; color: #2C3E50; margin-bottom: 30px; font-size: 18px; }
    .card {
        background: white;
        border-radius: 12px;
        padding: 20px;
        margin: 15px 0;
        border: 1px solid #e0e0e0;
        box-shadow: 0 2px 8px rgba(0,0,0,0.1);
    }
    .search-form { display: flex; gap: 10px; margin: 20px 0; }
    .search-form input {
        flex: 1;
        padding: 10px 14px;
        font-size: 16px;
        border: 1px solid #e0e0e0;
        border-radius: 8px;
    }
    .search-form button {
        background-color: #FF6B35;
        color: white;
        border: none;
        border-radius: 8px;
        padding: 10px 20px;
        font-size: 16px;
        cursor: pointer;
    }
    .search-form button:hover { background-color: #E85D2A; }
    .property-card {
        background: white;
        border-radius: 12px;
        padding: 20px;
        margin: 15px 0;
        border: 1px solid #e0e0e0;
        box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        color: #1a1a1a;
    }
    .property-title { font-size: 20px; font-weight: bold; color: #1a1a1a; margin-bottom: 10px; }
    .property-price { font-size: 24px; font-weight: bold; color: #FF6B35; margin: 10px 0; }
    .property-detail {
        display: inline-block;
        background: #f0f0f0;
        padding: 5px 12px;
        border-radius: 20px;
        margin: 5px 5px 5px 0;
        font-size: 14px;
        color: #333333;
    }
    .status-ready { background: #4CAF50; color: white; }
    .status-construction { background: #FF9800; color: white; }
    .cta-link {
        background: #FF6B35;
        color: white;
        padding: 8px 16px;
        border-radius: 8px;
        text-decoration: none;
        display: inline-block;
        margin-top: 10px;
        font-size: 14px;
    }
    .cta-link:hover { background: #E85D2A; }
    .info-box {
        background: #E3F2FD;
        border-radius: 8px;
        padding: 14px 18px;
        color: #2C3E50;
    }
    details.filters { margin: 10px 0; color: #2C3E50; }
    details.filters pre {
        background: #f4f4f4;
        padding: 10px;
        border-radius: 6px;
        overflow-x: auto;
    }
"#;

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
                    h3 { "Property Search" }
                    nav {
                        a href="/" { "Home" }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
