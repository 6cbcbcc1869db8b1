use i18nrs::yew::use_translation;
use shared::models::Community;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CommunityCardProps {
    pub community: Community,
}

/// Summary card of a single community.
#[function_component(CommunityCard)]
pub fn community_card(props: &CommunityCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let community = &props.community;
    let initial = community
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    html! {
        <div class="card bg-base-100 shadow-md" data-community={community.local_id.clone()}>
            <figure class="h-32 bg-base-300">
                if let Some(icon) = &community.icon {
                    <img src={icon.clone()} alt={community.name.clone()} class="object-cover w-full h-full" />
                } else {
                    <span class="text-4xl font-bold text-base-content/40">{initial}</span>
                }
            </figure>
            <div class="card-body p-4">
                <h3 class="card-title text-base">
                    {community.name.clone()}
                    if community.followed {
                        <span class="badge badge-primary badge-sm">{i18n.t("community.followed")}</span>
                    }
                </h3>
                if let Some(summary) = &community.summary {
                    <p class="text-sm line-clamp-3">{summary.clone()}</p>
                }
                <div class="flex gap-3 text-xs text-base-content/70">
                    <span>{format!("{} {}", community.members.total_count, i18n.t("community.members"))}</span>
                    <span>{format!("{} {}", community.collections.total_count, i18n.t("community.collections"))}</span>
                    <span>{format!("{} {}", community.threads.total_count, i18n.t("community.threads"))}</span>
                </div>
            </div>
        </div>
    }
}
