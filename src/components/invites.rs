//! Invites Banner Component
//!
//! Pending shared-list invitations with accept/decline, shown above the
//! lists. Hidden entirely when there are none.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::modal::use_modal;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InvitesBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let modal = use_modal();

    let respond = move |list_id: u32, accept: bool| {
        let Some(user_id) = ctx.user_id else { return };
        spawn_local(async move {
            match api::respond_invite(list_id, user_id, accept).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    modal.confirm("Error", &e.to_string()).await;
                }
            }
        });
    };

    view! {
        {move || {
            let invites = store.invites().get();
            (!invites.is_empty()).then(|| view! {
                <div class="invites-container">
                    <h3>"Pending Invitations 📩"</h3>
                    <For
                        each=move || store.invites().get()
                        key=|inv| inv.list_id
                        children=move |inv| {
                            let list_id = inv.list_id;
                            view! {
                                <div class="invite-item">
                                    <div>
                                        <strong>{inv.list_name.clone()}</strong>
                                        " from @" {inv.owner_name.clone()}
                                    </div>
                                    <div class="invite-actions">
                                        <button on:click=move |_| respond(list_id, true)>"✅"</button>
                                        <button on:click=move |_| respond(list_id, false)>"❌"</button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            })
        }}
    }
}
