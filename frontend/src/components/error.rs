use crate::api::ApiError;
use leptos::*;

fn validation_messages(error: &ApiError) -> Vec<String> {
    if !error.is_validation() {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn visible_code(error: &ApiError) -> Option<String> {
    let code = error.code.as_str();
    if code.is_empty() || code == ApiError::UNKNOWN || error.is_validation() {
        None
    } else {
        Some(code.to_string())
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="inline-error" role="alert">
                <div>{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = validation_messages(&e);
                    let code = visible_code(&e);
                    let list = (!messages.is_empty()).then(|| {
                        view! {
                            <ul>
                                {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                            </ul>
                        }
                    });
                    view! {
                        {list}
                        {code.map(|code| view! { <div class="inline-error__code">{"Code: "}{code}</div> })}
                    }
                })}
            </div>
        </Show>
    }
}
