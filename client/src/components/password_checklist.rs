//! Live password-rule checklist shown under new-password inputs.

use leptos::prelude::*;

use crate::util::password::{PasswordRule, PasswordStrength};

#[component]
pub fn PasswordChecklist(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| PasswordStrength::evaluate(&password.get()));

    view! {
        <ul class="password-checklist">
            {PasswordRule::ALL
                .into_iter()
                .map(|rule| {
                    view! {
                        <li
                            class="password-checklist__item"
                            class:password-checklist__item--met=move || strength.get().met(rule)
                        >
                            {rule.label()}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
