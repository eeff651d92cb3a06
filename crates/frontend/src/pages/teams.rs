//! Teams page component.

use yew::prelude::*;

use crate::components::{CheckedInCard, TeamTable, TotalTeamsCard, UncheckedCard};

/// Teams page component: stats row plus the roster table.
#[function_component(TeamsPage)]
pub fn teams_page() -> Html {
    html! {
        <div>
            <h1>{"Teams"}</h1>

            <div class="stats-grid">
                <TotalTeamsCard />
                <CheckedInCard />
                <UncheckedCard />
            </div>

            <TeamTable />
        </div>
    }
}
