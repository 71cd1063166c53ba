/// Sample template shown on first load.
pub const DEFAULT_TEMPLATE: &str = r#"<nav>
  <ul>
    {%- for item in nav %}
    <li><a href="{{ item.href }}">{{ item.title }}</a>
    {%- endfor %}
  </ul>
</nav>
<main>
  Hello {{ name }}!
</main>
"#;

/// Context for [`DEFAULT_TEMPLATE`], indented the way the context editor shows it.
pub const DEFAULT_CONTEXT: &str = r#"{
  "name": "World",
  "nav": [
    {
      "href": "/",
      "title": "Index"
    },
    {
      "href": "/help",
      "title": "Help"
    },
    {
      "href": "/about",
      "title": "About"
    }
  ]
}"#;
