use leptos::prelude::*;

use crate::usecases::u101_check_spam::view::CheckSpamPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CheckSpamPage />
    }
}
