use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// What the visitor has typed so far. Never leaves the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn complaint(self) -> &'static str {
        match self {
            ContactField::Name => "Indique su nombre completo.",
            ContactField::Email => "Indique un correo corporativo válido.",
            ContactField::Message => "Cuéntenos brevemente su proyecto.",
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

impl ContactDraft {
    /// Fields that would stop the draft from being accepted, in form order.
    pub fn problems(&self) -> Vec<ContactField> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push(ContactField::Name);
        }
        if !looks_like_email(&self.email) {
            problems.push(ContactField::Email);
        }
        if self.message.trim().is_empty() {
            problems.push(ContactField::Message);
        }
        problems
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Rejected(Vec<ContactField>),
    Acknowledged,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactDraft::default);
    let outcome = use_state(|| None::<Outcome>);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(ContactDraft {
                message: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let problems = draft.problems();
            if problems.is_empty() {
                log::info!("Contact request kept locally, no endpoint configured");
                outcome.set(Some(Outcome::Acknowledged));
                draft.set(ContactDraft::default());
            } else {
                outcome.set(Some(Outcome::Rejected(problems)));
            }
        })
    };

    let invalid = |field: ContactField| match &*outcome {
        Some(Outcome::Rejected(problems)) => problems.contains(&field),
        _ => false,
    };

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
            <input
                type="text"
                placeholder="Nombre Completo"
                class={classes!("contact-field", invalid(ContactField::Name).then_some("invalid"))}
                value={draft.name.clone()}
                oninput={on_name}
            />
            <input
                type="email"
                placeholder="Correo Corporativo"
                class={classes!("contact-field", invalid(ContactField::Email).then_some("invalid"))}
                value={draft.email.clone()}
                oninput={on_email}
            />
            <textarea
                placeholder="Cuéntenos sobre su proyecto o desafío de datos..."
                class={classes!("contact-field", "wide", invalid(ContactField::Message).then_some("invalid"))}
                value={draft.message.clone()}
                oninput={on_message}
            />
            <button type="submit" class="contact-submit">
                {"Solicitar Auditoría de Estrategia"}
            </button>
            {
                match &*outcome {
                    Some(Outcome::Rejected(problems)) => html! {
                        <ul class="contact-notice error">
                            { for problems.iter().map(|p| html! { <li>{p.complaint()}</li> }) }
                        </ul>
                    },
                    Some(Outcome::Acknowledged) => html! {
                        <p class="contact-notice ok">
                            {"Gracias. Un especialista se pondrá en contacto con usted."}
                        </p>
                    },
                    None => html! {},
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn complete_draft_has_no_problems() {
        let d = draft("Ada Lovelace", "ada@empresa.com", "Necesitamos un lakehouse.");
        assert!(d.problems().is_empty());
    }

    #[test]
    fn empty_draft_lists_every_field_in_order() {
        assert_eq!(
            ContactDraft::default().problems(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let d = draft("   ", "ops@corp.io", "\n\t");
        assert_eq!(d.problems(), vec![ContactField::Name, ContactField::Message]);
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "  data.team@corp.example.com ", "x+y@sub.domain.org"] {
            assert!(looks_like_email(ok), "{} should pass", ok);
        }
        for bad in [
            "",
            "no-at-sign.com",
            "@corp.com",
            "user@",
            "user@localhost",
            "user@corp..com",
            "user@.corp.com",
            "user@corp.com.",
            "us er@corp.com",
            "a@b@c.com",
        ] {
            assert!(!looks_like_email(bad), "{} should fail", bad);
        }
    }
}
