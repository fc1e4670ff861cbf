use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Removes hydration comments and `data-hk` attributes so two renders can be
/// compared structurally.
pub fn strip_hydration_markers(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    loop {
        let comment = rest.find("<!--");
        let attr = rest.find(" data-hk=\"");
        let next = match (comment, attr) {
            (Some(c), Some(a)) => Some(c.min(a)),
            (c, a) => c.or(a),
        };
        let Some(start) = next else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let skip = if tail.starts_with("<!--") {
            tail.find("-->").map(|end| end + 3)
        } else {
            let value_start = " data-hk=\"".len();
            tail[value_start..].find('"').map(|end| value_start + end + 1)
        };
        match skip {
            Some(skip) => rest = &tail[skip..],
            None => {
                out.push_str(tail);
                break;
            }
        }
    }
    out
}

#[test]
fn strip_hydration_markers_keeps_markup() {
    let html = r#"<div data-hk="0-0-0-1" class="a"><!--hk=0-0-0-2o|leptos-x-start--><p>hi</p><!--hk=0-0-0-2c|leptos-x-end--></div>"#;
    assert_eq!(
        strip_hydration_markers(html),
        r#"<div class="a"><p>hi</p></div>"#
    );
}
