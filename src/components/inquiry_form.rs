use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Notice, NoticeKind};
use crate::hooks::{use_inquiry_form, UseInquiryFormHandle};
use crate::inquiry::{Budget, Choice, Field, FieldUpdate, Lifecycle, ProjectType, Timeline};

fn text_input(form: &UseInquiryFormHandle, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        form.set_field(FieldUpdate::from_raw(field, &input.value()));
    })
}

fn select_input(form: &UseInquiryFormHandle, field: Field) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        form.set_field(FieldUpdate::from_raw(field, &select.value()));
    })
}

fn choice_options<C: Choice>(current: Option<C>, placeholder: &'static str) -> Html {
    html! {
        <>
            <option value="" selected={current.is_none()}>{placeholder}</option>
            { for C::ALL.iter().map(|choice| html! {
                <option value={choice.value()} selected={current == Some(*choice)}>
                    {choice.label()}
                </option>
            }) }
        </>
    }
}

fn label_text(field: Field) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

/// The "Get Your Free Quote" lead-capture form.
#[function_component(InquiryForm)]
pub fn inquiry_form() -> Html {
    let form = use_inquiry_form();
    let fields = form.fields();
    let validation = form.validation();

    if form.lifecycle() == Lifecycle::Acknowledged {
        return html! {
            <Notice kind={NoticeKind::Success} title="Thank You!">
                <p>{"We'll get back to you within 24 hours."}</p>
            </Notice>
        };
    }

    let submitting = form.lifecycle() == Lifecycle::Submitting;
    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.submit();
        })
    };
    let oninput_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set_field(FieldUpdate::Message(input.value()));
        })
    };
    let field_class = |field: Field| {
        classes!(
            "form-control",
            validation
                .as_ref()
                .map_or(false, |v| v.mentions(field))
                .then_some("invalid")
        )
    };

    html! {
        <form class="inquiry-form" onsubmit={onsubmit} novalidate=true>
            {
                if let Some(error) = form.delivery_error() {
                    html! {
                        <Notice kind={NoticeKind::Error} title="We couldn't send your message">
                            <p>{error.to_string()}</p>
                            <p>{"Please try again, or call us directly."}</p>
                        </Notice>
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(error) = validation.as_ref() {
                    html! {
                        <ul class="form-errors">
                            { for error.missing.iter().map(|f| html! { <li>{format!("{} is required", f.label())}</li> }) }
                            { for error.invalid.iter().map(|f| html! { <li>{format!("{} looks incorrect", f.label())}</li> }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
            <div class="form-row">
                <div>
                    <label for="inquiry-name">{label_text(Field::Name)}</label>
                    <input
                        id="inquiry-name"
                        type="text"
                        class={field_class(Field::Name)}
                        placeholder="Your full name"
                        value={fields.raw(Field::Name).to_owned()}
                        oninput={text_input(&form, Field::Name)}
                        required=true
                    />
                </div>
                <div>
                    <label for="inquiry-email">{label_text(Field::Email)}</label>
                    <input
                        id="inquiry-email"
                        type="email"
                        class={field_class(Field::Email)}
                        placeholder="your@email.com"
                        value={fields.raw(Field::Email).to_owned()}
                        oninput={text_input(&form, Field::Email)}
                        required=true
                    />
                </div>
            </div>
            <div class="form-row">
                <div>
                    <label for="inquiry-phone">{label_text(Field::Phone)}</label>
                    <input
                        id="inquiry-phone"
                        type="tel"
                        class={field_class(Field::Phone)}
                        placeholder="(604) 123-4567"
                        value={fields.raw(Field::Phone).to_owned()}
                        oninput={text_input(&form, Field::Phone)}
                    />
                </div>
                <div>
                    <label for="inquiry-project-type">{label_text(Field::ProjectType)}</label>
                    <select
                        id="inquiry-project-type"
                        class={field_class(Field::ProjectType)}
                        onchange={select_input(&form, Field::ProjectType)}
                        required=true
                    >
                        { choice_options::<ProjectType>(fields.project_type, "Select project type") }
                    </select>
                </div>
            </div>
            <div class="form-row">
                <div>
                    <label for="inquiry-budget">{label_text(Field::Budget)}</label>
                    <select
                        id="inquiry-budget"
                        class={field_class(Field::Budget)}
                        onchange={select_input(&form, Field::Budget)}
                    >
                        { choice_options::<Budget>(fields.budget, "Select budget range") }
                    </select>
                </div>
                <div>
                    <label for="inquiry-timeline">{label_text(Field::Timeline)}</label>
                    <select
                        id="inquiry-timeline"
                        class={field_class(Field::Timeline)}
                        onchange={select_input(&form, Field::Timeline)}
                    >
                        { choice_options::<Timeline>(fields.timeline, "Select timeline") }
                    </select>
                </div>
            </div>
            <div>
                <label for="inquiry-message">{label_text(Field::Message)}</label>
                <textarea
                    id="inquiry-message"
                    class={field_class(Field::Message)}
                    placeholder="Tell us about your project, including location, specific requirements, and any questions you have..."
                    value={fields.raw(Field::Message).to_owned()}
                    oninput={oninput_message}
                    required=true
                />
            </div>
            <button type="submit" class="submit-button" disabled={submitting}>
                { if submitting { "Sending..." } else { "Send Message ➤" } }
            </button>
            <style>
                {r#"
                .inquiry-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .inquiry-form label {
                    display: block;
                    color: #cbd5e1;
                    margin-bottom: 0.5rem;
                }
                .form-control {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid #475569;
                    background: rgba(51, 65, 85, 0.5);
                    color: #fff;
                    font: inherit;
                }
                .form-control.invalid {
                    border-color: #f87171;
                }
                textarea.form-control {
                    min-height: 120px;
                    resize: vertical;
                }
                .form-errors {
                    margin: 0;
                    padding: 1rem 1.5rem;
                    border-radius: 8px;
                    background: rgba(239, 68, 68, 0.1);
                    color: #fca5a5;
                }
                .submit-button {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 9999px;
                    background: #2563eb;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.3s, background 0.3s;
                }
                .submit-button:hover:not(:disabled) {
                    background: #1d4ed8;
                    transform: scale(1.05);
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </form>
    }
}
