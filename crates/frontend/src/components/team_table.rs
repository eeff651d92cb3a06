//! Team roster table component.
//!
//! Wraps the shared [`RosterModel`] in a reducer store. Check-in
//! toggles are not applied locally; the mutation is sent and the whole
//! roster is reloaded, so a checkbox reflects server state only after
//! the round-trip. Each load carries a generation token and the model
//! discards completions that have been superseded.

use std::rc::Rc;

use registration_types::roster::{RosterModel, SortDirection, SortKey};
use registration_types::Team;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::Loading;

const COLUMNS: [(SortKey, &str); 4] = [
    (SortKey::TeamName, "Team Name"),
    (SortKey::TeamLeader, "Team Leader"),
    (SortKey::TeamMembers, "Team Members"),
    (SortKey::CheckedIn, "Checked In"),
];

enum RosterAction {
    Loaded { generation: u64, teams: Vec<Team> },
    Search(String),
    SortBy(SortKey),
    ResetView,
}

#[derive(Default, PartialEq)]
struct RosterState {
    model: RosterModel,
}

impl Reducible for RosterState {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: RosterAction) -> Rc<Self> {
        let mut model = self.model.clone();
        match action {
            RosterAction::Loaded { generation, teams } => {
                model.apply_load(generation, teams);
            }
            RosterAction::Search(term) => model.search(&term),
            RosterAction::SortBy(key) => model.toggle_sort(key),
            RosterAction::ResetView => model.reset_view(),
        }
        Rc::new(Self { model })
    }
}

fn display_or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

/// Team roster table component.
#[function_component(TeamTable)]
pub fn team_table() -> Html {
    let roster = use_reducer(RosterState::default);
    let loading = use_state(|| true);
    let load_generation = use_mut_ref(|| 0u64);

    // Fetch the roster; stale completions are dropped by the model.
    let reload = {
        let roster = roster.dispatcher();
        let loading = loading.clone();
        let load_generation = load_generation.clone();

        Callback::from(move |_: ()| {
            let roster = roster.clone();
            let loading = loading.clone();
            let generation = {
                let mut current = load_generation.borrow_mut();
                *current += 1;
                *current
            };

            spawn_local(async move {
                match api::fetch_teams().await {
                    Ok(teams) => roster.dispatch(RosterAction::Loaded { generation, teams }),
                    Err(e) => api::log_error("Error fetching teams", &e),
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();

        use_effect_with((), move |_| {
            reload.emit(());
        });
    }

    let on_search_input = {
        let roster = roster.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            roster.dispatch(RosterAction::Search(input.value()));
        })
    };

    let on_reset = {
        let roster = roster.dispatcher();
        Callback::from(move |_: MouseEvent| roster.dispatch(RosterAction::ResetView))
    };

    // Send the mutation, then resynchronize from the server whether or
    // not it succeeded.
    let on_toggle = {
        let reload = reload.clone();
        Callback::from(move |(team_id, currently_checked): (String, bool)| {
            let reload = reload.clone();
            spawn_local(async move {
                if let Err(e) = api::update_check_status(&team_id, currently_checked).await {
                    api::log_error("Error updating check-in status", &e);
                }
                reload.emit(());
            });
        })
    };

    let sort = roster.model.sort();

    html! {
        <div class="card table-card">
            <div class="card-header">
                <h2 class="card-title table-reset" onclick={on_reset} title="Reset sorting">
                    {"Team List"}
                </h2>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search teams..."
                    value={roster.model.search_term().to_string()}
                    oninput={on_search_input}
                />
            </div>

            if *loading {
                <Loading />
            } else if roster.model.visible().is_empty() {
                <p class="empty-note">{"No teams found."}</p>
            } else {
                <div class="table-wrap">
                    <table class="roster-table">
                        <thead>
                            <tr>
                                { for COLUMNS.iter().map(|&(key, label)| {
                                    let onclick = {
                                        let roster = roster.dispatcher();
                                        Callback::from(move |_: MouseEvent| {
                                            roster.dispatch(RosterAction::SortBy(key));
                                        })
                                    };
                                    let indicator = if sort.key == Some(key) {
                                        match sort.direction {
                                            SortDirection::Ascending => "▲",
                                            SortDirection::Descending => "▼",
                                        }
                                    } else {
                                        ""
                                    };

                                    html! {
                                        <th onclick={onclick}>
                                            { label }
                                            <span class="sort-indicator">{ indicator }</span>
                                        </th>
                                    }
                                })}
                            </tr>
                        </thead>
                        <tbody>
                            { for roster.model.visible().iter().map(|team| {
                                let onchange = {
                                    let on_toggle = on_toggle.clone();
                                    let team_id = team.id.clone();
                                    let currently_checked = team.is_checkedin;
                                    Callback::from(move |_: Event| {
                                        on_toggle.emit((team_id.clone(), currently_checked));
                                    })
                                };
                                let members = team.member_roster();

                                html! {
                                    <tr key={team.id.clone()}>
                                        <td class="team-name">{ display_or_na(team.name()) }</td>
                                        <td>{ display_or_na(team.leader_name()) }</td>
                                        <td>{ display_or_na(&members) }</td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                checked={team.is_checkedin}
                                                onchange={onchange}
                                            />
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
