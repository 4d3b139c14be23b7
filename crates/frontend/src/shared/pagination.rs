//! Client-requested pagination shared by the list views: a page-state pair
//! of signals plus the pager control. List views watch `query` and refetch.

use contracts::shared::api::PageQuery;
use leptos::prelude::*;

/// Pager state owned by a list view: the query to send and the total the
/// backend reported back.
#[derive(Clone, Copy)]
pub struct PageState {
    pub query: RwSignal<PageQuery>,
    pub total: RwSignal<u64>,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(PageQuery::default()),
            total: RwSignal::new(0),
        }
    }

    pub fn page_count(&self) -> u64 {
        let size = self.query.get().page_size.max(1) as u64;
        self.total.get().div_ceil(size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

/// Previous/next control with a page indicator. Refetching is driven by the
/// owning view watching `state.query`.
#[component]
pub fn Pager(state: PageState) -> impl IntoView {
    let current = move || state.query.get().current_page;
    let last = move || state.page_count().max(1);

    let go = move |delta: i64| {
        let last_page = last() as i64;
        state.query.update(|query| {
            let page = (query.current_page as i64 + delta).clamp(1, last_page);
            query.current_page = page as u32;
        });
    };

    view! {
        <div class="pager">
            <button
                class="pager__btn"
                disabled=move || current() <= 1
                on:click=move |_| go(-1)
            >
                "上一页"
            </button>
            <span class="pager__info">
                {move || format!("第 {} / {} 页，共 {} 条", current(), last(), state.total.get())}
            </span>
            <button
                class="pager__btn"
                disabled=move || (current() as u64) >= last()
                on:click=move |_| go(1)
            >
                "下一页"
            </button>
        </div>
    }
}
