use contracts::shared::confidence::confidence_percent;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_check_spam::CheckSpam;
use leptos::prelude::*;

use super::state::CheckState;
use super::view_model::CheckViewModel;

#[component]
pub fn CheckSpamPage() -> impl IntoView {
    let vm = CheckViewModel::new();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        // Enter submits, Shift+Enter keeps inserting a newline
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            vm.check_command();
        }
    };

    view! {
        <div id="u101_check_spam--usecase" style="padding: 20px; border: 1px solid #ccc; border-radius: 8px; max-width: 600px; margin: 20px auto;">
            <h2>{CheckSpam::display_name()}</h2>

            <div style="margin: 20px 0;">
                <p style="color: #666;">
                    "Paste a message below to find out whether it looks like spam"
                </p>
            </div>

            <textarea
                placeholder="Type or paste a message..."
                style="width: 100%; min-height: 100px; padding: 10px; border: 1px solid #ccc; border-radius: 4px; font-size: 14px; resize: vertical;"
                prop:value=move || vm.message.get()
                on:input=move |ev| vm.message.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>

            <div style="margin: 20px 0;">
                <button
                    style="padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px;"
                    on:click=move |_| vm.check_command()
                    prop:disabled=move || vm.state.get().is_checking()
                >
                    {move || if vm.state.get().is_checking() {
                        "Checking..."
                    } else {
                        "Check Message"
                    }}
                </button>
            </div>

            // Verdict
            {move || {
                if let CheckState::Success(verdict) = vm.state.get() {
                    let confidence = confidence_percent(verdict.probability);
                    let (icon, color, text) = if verdict.is_spam {
                        ("\u{26A0}", "#dc3545", "Spam Detected")
                    } else {
                        ("\u{2713}", "#28a745", "Legitimate Message")
                    };
                    view! {
                        <div style="margin-top: 20px; padding: 15px; background: #f9f9f9; border-radius: 8px; border: 1px solid #ddd;">
                            <div style="margin: 10px 0;">
                                <span style={format!("font-size: 24px; color: {};", color)}>{icon}</span>
                                <span style={format!("margin-left: 10px; font-size: 18px; font-weight: bold; color: {};", color)}>
                                    {text}
                                </span>
                            </div>

                            <div style="margin: 10px 0;">
                                <strong>"Confidence: "</strong>
                                {confidence} "%"
                            </div>
                            <div style="background: #e0e0e0; height: 20px; border-radius: 4px; overflow: hidden; margin: 10px 0;">
                                <div style={format!("width: {}%; height: 100%; background: {}; transition: width 0.3s;", confidence, color)}></div>
                            </div>
                        </div>
                    }.into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}

            // Error text, either local validation or a failed service call
            {move || {
                if let CheckState::Error(msg) = vm.state.get() {
                    view! {
                        <div style="padding: 10px; background: #fee; border: 1px solid #fcc; border-radius: 4px; color: #c00; margin: 10px 0;">
                            {msg}
                        </div>
                    }.into_any()
                } else {
                    view! { <div></div> }.into_any()
                }
            }}
        </div>
    }
}
