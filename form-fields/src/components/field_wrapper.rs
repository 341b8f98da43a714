//! Field Wrapper Component - label, control and error message

use leptos::prelude::*;

use crate::utils::classes::{join_classes, label_class};
use crate::utils::constants::{ERROR_MESSAGE_CLASS, FIELD_CLASS};

/// Lays out one form field: a label, the wrapped control and, when `error`
/// holds a non-empty message, that message underneath.
///
/// The error text is rendered as given; computing it is up to the caller's
/// form state.
///
/// ```rust,ignore
/// view! {
///     <FieldWrapper label="Email" required=true error=email_error html_for="email">
///         <TextInputField error=Signal::derive(move || email_error.get().is_some()) {..} id="email"/>
///     </FieldWrapper>
/// }
/// ```
#[component]
pub fn FieldWrapper(
    /// Label text.
    #[prop(into)]
    label: String,
    /// Marks the label as required.
    #[prop(optional, into)]
    required: MaybeProp<bool>,
    /// Error message shown under the control; empty or absent shows nothing.
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Id of the control the label points at.
    #[prop(optional, into)]
    html_for: Option<String>,
    /// Extra class for the wrapping element.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    log::trace!("FieldWrapper render: label={label:?}");

    let wrapper_class = move || join_classes([Some(FIELD_CLASS.to_string()), class.get()]);
    let label_classes = move || label_class(required.get().unwrap_or(false));
    let error_message = move || {
        error
            .get()
            .filter(|message| !message.is_empty())
            .map(|message| view! { <p class=ERROR_MESSAGE_CLASS>{message}</p> })
    };

    view! {
        <div class=wrapper_class>
            <label class=label_classes for=html_for>
                {label}
            </label>
            {children()}
            {error_message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_html;

    #[test]
    fn test_field_wrapper_renders_label_required_and_error() {
        let html = render_html(|| {
            view! {
                <FieldWrapper label="Email" required=true error="Invalid email">
                    <input/>
                </FieldWrapper>
            }
        });

        assert!(html.contains("Email"));
        assert!(html.contains(r#"class="field-label field-label-required""#));
        assert!(html.contains(r#"<p class="field-error">Invalid email</p>"#));
        assert!(html.contains("<input"));
    }

    #[test]
    fn test_field_wrapper_without_error_renders_no_message() {
        let absent = render_html(|| {
            view! {
                <FieldWrapper label="Name">
                    <input/>
                </FieldWrapper>
            }
        });
        let empty = render_html(|| {
            view! {
                <FieldWrapper label="Name" error="">
                    <input/>
                </FieldWrapper>
            }
        });

        for html in [absent, empty] {
            assert!(!html.contains("field-error"));
            assert!(!html.contains("<p"));
        }
    }

    #[test]
    fn test_field_wrapper_required_marker_follows_flag() {
        for required in [false, true] {
            let html = render_html(move || {
                view! {
                    <FieldWrapper label="Bio" required=required>
                        <textarea/>
                    </FieldWrapper>
                }
            });
            assert_eq!(html.contains("field-label-required"), required);
            assert!(html.contains("field-label"));
        }
    }

    #[test]
    fn test_field_wrapper_extra_class_and_label_target() {
        let html = render_html(|| {
            view! {
                <FieldWrapper label="Role" class="compact" html_for="role">
                    <select id="role"></select>
                </FieldWrapper>
            }
        });

        assert!(html.contains(r#"class="field compact""#));
        assert!(html.contains(r#"for="role""#));
    }

    #[test]
    fn test_field_wrapper_without_target_has_no_for_attribute() {
        let html = render_html(|| {
            view! {
                <FieldWrapper label="Role">
                    <select></select>
                </FieldWrapper>
            }
        });

        assert!(html.contains(r#"class="field""#));
        assert!(!html.contains("for="));
    }

    #[test]
    fn test_field_wrapper_error_follows_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let error = RwSignal::new(None::<String>);
            let render = move || {
                render_html(move || {
                    view! {
                        <FieldWrapper label="Password" error=Signal::derive(move || error.get())>
                            <input type="password"/>
                        </FieldWrapper>
                    }
                })
            };

            assert!(!render().contains("field-error"));
            error.set(Some("Too short".to_string()));
            assert!(render().contains(">Too short</p>"));
        });
    }

    #[test]
    fn test_field_wrapper_render_is_idempotent() {
        let render = || {
            render_html(|| {
                view! {
                    <FieldWrapper label="Email" required=true error="Invalid email">
                        <input name="email"/>
                    </FieldWrapper>
                }
            })
        };
        assert_eq!(render(), render());
    }
}
