use crate::components::{CommunityCard, LoadMore, Loading};
use crate::config::FrontendConfig;
use crate::services::use_services;
use i18nrs::yew::use_translation;
use shared::errors::FetchResult;
use shared::models::{Community, CommunityPage};
use shared::pagination::{LIST_ERROR, ListStatus, PagedList, fetch_page};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn log_failure(result: &FetchResult<CommunityPage>) {
    if let Err(err) = result {
        log(&format!("Failed to load communities: {err}"));
    }
}

#[derive(Clone, Default, PartialEq)]
struct ListModel {
    list: PagedList<Community>,
}

enum ListAction {
    InitialFinished(FetchResult<CommunityPage>),
    BeginLoadMore,
    LoadMoreFinished(FetchResult<CommunityPage>),
}

impl Reducible for ListModel {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = self.list.clone();
        match action {
            ListAction::InitialFinished(result) => list.initial_finished(result),
            ListAction::BeginLoadMore => {
                list.begin_load_more();
            }
            ListAction::LoadMoreFinished(result) => {
                list.load_more_finished(result);
            }
        }
        Rc::new(Self { list })
    }
}

/// Every community on the instance, one page at a time.
#[function_component(CommunitiesAllPage)]
pub fn communities_all_page() -> Html {
    let (i18n, ..) = use_translation();
    let model = use_reducer(ListModel::default);
    let services = use_services();
    let page_size = FrontendConfig::new().client.page_size;

    {
        let model = model.clone();
        let fetcher = services.fetcher.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = fetch_page(&*fetcher, page_size, None).await;
                log_failure(&result);
                model.dispatch(ListAction::InitialFinished(result));
            });
            || ()
        });
    }

    let on_load_more = {
        let model = model.clone();
        let fetcher = services.fetcher.clone();
        Callback::from(move |()| {
            let mut preview = model.list.clone();
            let Some(cursor) = preview.begin_load_more() else {
                return;
            };
            model.dispatch(ListAction::BeginLoadMore);

            let model = model.clone();
            let fetcher = fetcher.clone();
            spawn_local(async move {
                let result = fetch_page(&*fetcher, page_size, Some(cursor)).await;
                log_failure(&result);
                model.dispatch(ListAction::LoadMoreFinished(result));
            });
        })
    };

    let list = &model.list;
    let body = match list.status() {
        ListStatus::Loading => html! { <Loading /> },
        ListStatus::Failed => html! {
            <div class="alert alert-error" role="alert">
                <span>{i18n.t(LIST_ERROR)}</span>
            </div>
        },
        ListStatus::Ready if list.items().is_empty() => html! {
            <p class="text-base-content/70">{i18n.t("communities.empty")}</p>
        },
        ListStatus::Ready => html! {
            <>
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    { for list.items().iter().map(|community| html! {
                        <CommunityCard key={community.id.clone()} community={community.clone()} />
                    }) }
                </div>
                <LoadMore
                    has_more={list.has_more()}
                    loading={list.is_loading_more()}
                    failed={list.load_more_failed()}
                    on_click={on_load_more}
                />
            </>
        },
    };

    html! {
        <section class="container mx-auto">
            <h2 class="text-2xl font-semibold mb-4">{i18n.t("communities.title")}</h2>
            {body}
        </section>
    }
}
