pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell: navigation bar on top, routed page below.
///
/// ```text
/// +------------------------------------------+
/// |  Brand            Add Employee | List    |
/// +------------------------------------------+
/// |               page content               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">{children()}</main>
        </div>
    }
}
