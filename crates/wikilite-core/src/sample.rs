use crate::catalog::Catalog;
use crate::error::WikiError;
use crate::model::{Article, Section};

/// The built-in articles served when no article directory is configured.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article::new(
            "html-basics",
            "HTML Basics",
            vec![
                Section::new(
                    "Introduction",
                    "HTML (HyperText Markup Language) is the standard markup language for creating web pages. It describes the structure of a webpage using a system of elements and tags.",
                ),
                Section::new(
                    "Basic Structure",
                    r#"<pre><code>&lt;!DOCTYPE html&gt;
&lt;html&gt;
  &lt;head&gt;
    &lt;title&gt;Title&lt;/title&gt;
  &lt;/head&gt;
  &lt;body&gt;
    Content here
  &lt;/body&gt;
&lt;/html&gt;</code></pre>"#,
                ),
                Section::new(
                    "Common Tags",
                    "<ul><li>&lt;h1&gt; to &lt;h6&gt;: Headings</li><li>&lt;p&gt;: Paragraph</li><li>&lt;a&gt;: Link</li><li>&lt;img&gt;: Image</li><li>&lt;ul&gt;, &lt;ol&gt;, &lt;li&gt;: Lists</li></ul>",
                ),
            ],
        ),
        Article::new(
            "css-styling",
            "CSS Styling",
            vec![
                Section::new(
                    "Introduction",
                    "CSS (Cascading Style Sheets) is used to style and layout web pages. It controls colors, fonts, spacing, and positioning of elements.",
                ),
                Section::new(
                    "Selectors",
                    "<ul><li><b>Element selector:</b> <code>p { color: red; }</code></li><li><b>Class selector:</b> <code>.myclass { ... }</code></li><li><b>ID selector:</b> <code>#myid { ... }</code></li></ul>",
                ),
                Section::new(
                    "Box Model",
                    "Every element is a rectangle. The box model consists of <b>content</b>, <b>padding</b>, <b>border</b>, and <b>margin</b>.",
                ),
            ],
        ),
        Article::new(
            "js-functions",
            "JavaScript Functions",
            vec![
                Section::new(
                    "Introduction",
                    "Functions are blocks of code designed to perform a particular task. They are executed when called.",
                ),
                Section::new(
                    "Function Declaration",
                    r#"<pre><code>function greet(name) {
  return 'Hello, ' + name + '!';
}</code></pre>"#,
                ),
                Section::new(
                    "Arrow Functions",
                    "<pre><code>const add = (a, b) => a + b;</code></pre>",
                ),
            ],
        ),
        Article::new(
            "web-accessibility",
            "Web Accessibility",
            vec![
                Section::new(
                    "Introduction",
                    "Web accessibility means making websites usable by people of all abilities and disabilities.",
                ),
                Section::new(
                    "ARIA Roles",
                    "Accessible Rich Internet Applications (ARIA) roles help assistive technologies understand web content.",
                ),
            ],
        ),
    ]
}

impl Catalog {
    pub fn sample() -> Result<Self, WikiError> {
        Catalog::new(sample_articles())
    }
}
