//! Stat widgets for the teams page.
//!
//! Each widget fetches its own endpoint on mount, independently of the
//! roster table and of the other widgets. After a check-in toggle they
//! stay on their last fetched count until their next mount, which can
//! briefly disagree with the table.

use yew::prelude::*;

use crate::api;
use crate::components::StatCard;

fn count_value(count: &Option<usize>) -> String {
    count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Total registered teams.
#[function_component(TotalTeamsCard)]
pub fn total_teams_card() -> Html {
    let count = use_state(|| None::<usize>);

    {
        let count = count.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_teams().await {
                    Ok(teams) => count.set(Some(teams.len())),
                    Err(e) => api::log_error("Error fetching registrations", &e),
                }
            });
        });
    }

    html! {
        <StatCard value={count_value(&count)} label={"Total Teams"} />
    }
}

/// Teams already marked present.
#[function_component(CheckedInCard)]
pub fn checked_in_card() -> Html {
    let count = use_state(|| None::<usize>);

    {
        let count = count.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_checked_in().await {
                    Ok(teams) => count.set(Some(teams.len())),
                    Err(e) => api::log_error("Error fetching checked-in teams", &e),
                }
            });
        });
    }

    html! {
        <StatCard value={count_value(&count)} label={"Checked In"} />
    }
}

/// Teams not yet checked in.
#[function_component(UncheckedCard)]
pub fn unchecked_card() -> Html {
    let count = use_state(|| None::<usize>);

    {
        let count = count.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_unchecked().await {
                    Ok(teams) => count.set(Some(teams.len())),
                    Err(e) => api::log_error("Error fetching unchecked teams", &e),
                }
            });
        });
    }

    html! {
        <StatCard value={count_value(&count)} label={"Unchecked"} />
    }
}
