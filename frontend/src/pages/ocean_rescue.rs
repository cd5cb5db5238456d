use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::narrative::{NarrativeAction, NarrativeController, NarrativeEffect, NarrativeState, Step};
use crate::navigation::{scroll_to_top, use_navigate_to};
use crate::Route;

#[derive(Properties, PartialEq)]
struct StepCardProps {
    state: NarrativeState,
    can_submit_name: bool,
    dispatch: Callback<NarrativeAction>,
}

/// The prompt shown on the overlay card for the current step.
#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let send = |action: NarrativeAction| {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(action.clone()))
    };

    match props.state.step() {
        Step::PledgePrompt => html! {
            <div class="card-body">
                <h3>{"Welcome to the Ocean."}</h3>
                <p class="card-text">{"The water is dark and lifeless due to waste. Let's see if we can change that."}</p>
                <div class="card-divider"></div>
                <p class="card-question">{"Did you sign the #ReDress pledge?"}</p>
                <button class="card-button primary full" onclick={send(NarrativeAction::ConfirmPledge)}>
                    {"✓ Yes, I did!"}
                </button>
            </div>
        },
        Step::NameCapture => {
            let oninput = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    dispatch.emit(NarrativeAction::SetPendingName(input.value()));
                })
            };
            let onsubmit = {
                let dispatch = props.dispatch.clone();
                let pending = props.state.pending_name_input().to_string();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    dispatch.emit(NarrativeAction::SubmitName(pending.clone()));
                })
            };
            html! {
                <div class="card-body">
                    <h3 class="healed">{"Look! The turtle is healing!"}</h3>
                    <p class="card-text">{"Your commitment brings life back to the ocean."}</p>
                    <div class="card-divider"></div>
                    <p class="card-question">{"What is your name?"}</p>
                    <form class="name-form" {onsubmit}>
                        <input
                            type="text"
                            value={props.state.pending_name_input().to_string()}
                            {oninput}
                            placeholder="Enter your name..."
                            autofocus={props.state.overlay_visible()}
                        />
                        <button type="submit" class="card-button primary" disabled={!props.can_submit_name}>
                            {"➤"}
                        </button>
                    </form>
                </div>
            }
        }
        Step::SustainabilityQuestion => html! {
            <div class="card-body">
                <h3 class="greeting">{format!("Hi, {}!", props.state.user_name())}</h3>
                <p class="card-text">{"You are now part of this ecosystem."}</p>
                <div class="card-divider"></div>
                <p class="card-question">
                    {"Did you think about the sustainability of the clothes you put on today?"}
                </p>
                <div class="card-choices">
                    <button class="card-button teal" onclick={send(NarrativeAction::ConfirmSustainable)}>
                        {"Yes"}
                    </button>
                    <button class="card-button muted" onclick={send(NarrativeAction::DeclineSustainable)}>
                        {"Not really"}
                    </button>
                </div>
            </div>
        },
        Step::ResultReveal => html! {
            <div class="card-body">
                <div class="card-badge badge-green">{"✨"}</div>
                <h3 class="headline">{"Change is Happening!"}</h3>
                <p class="card-text large">
                    {"Did you see that? "}
                    <strong class="highlight">{"A piece of waste disappeared"}</strong>
                    {", and the ocean got brighter."}
                </p>
                <p class="card-quote">
                    {"\"Your individual choices ripple out to create waves of change for Ghana and the world.\""}
                </p>
                <button class="card-button primary full" onclick={send(NarrativeAction::ContinueToFinal)}>
                    {"Continue ›"}
                </button>
            </div>
        },
        Step::Farewell => html! {
            <div class="card-body">
                <div class="card-badge badge-blue">{"🌊"}</div>
                <h3 class="headline">{"Thank You!"}</h3>
                <p class="card-text large">
                    {"Thank you for saving the ocean today, "}
                    <strong class="name">{props.state.user_name()}</strong>
                    {"."}
                </p>
                <p class="card-text">{"Please come back again tomorrow to see how else you can contribute!"}</p>
                <div class="card-divider"></div>
                <button class="replay-link" onclick={send(NarrativeAction::Reset)}>
                    {"Replay Experience"}
                </button>
            </div>
        },
    }
}

fn bubbles() -> Html {
    html! {
        <div class="ambient bubbles">
            { for (0..20u32).map(|i| {
                let style = format!(
                    "top: {}%; left: {}%; width: {}px; height: {}px; animation-duration: {}s; animation-delay: -{}s;",
                    (i * 37) % 100,
                    (i * 53 + 11) % 100,
                    2 + i % 4,
                    2 + (i * 3) % 4,
                    5 + (i * 7) % 10,
                    (i * 13) % 10,
                );
                html! { <div key={i} class="bubble" {style}></div> }
            }) }
        </div>
    }
}

#[function_component(OceanRescue)]
pub fn ocean_rescue() -> Html {
    let controller = use_mut_ref(|| NarrativeController::new(config::get_overlay_reveal_delay()));
    let reveal_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();
    let navigate_to = use_navigate_to();

    {
        let reveal_timer = reveal_timer.clone();
        use_effect_with_deps(
            move |_| {
                scroll_to_top();
                // Leaving the page drops the controller, so a late reveal has nothing to show.
                move || {
                    reveal_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let dispatch = {
        let controller = controller.clone();
        let reveal_timer = reveal_timer.clone();
        let redraw = redraw.clone();
        Callback::from(move |action: NarrativeAction| {
            if action == NarrativeAction::Reset {
                reveal_timer.borrow_mut().take();
            }
            let effects = controller.borrow_mut().apply(action);
            for effect in effects {
                match effect {
                    NarrativeEffect::ScheduleReveal(ticket) => {
                        let controller = controller.clone();
                        let redraw = redraw.clone();
                        let timeout = Timeout::new(ticket.delay_millis(), move || {
                            if controller.borrow_mut().reveal_overlay(ticket) {
                                redraw.force_update();
                            }
                        });
                        // Replacing the handle cancels the superseded timer.
                        *reveal_timer.borrow_mut() = Some(timeout);
                    }
                    NarrativeEffect::Acknowledge(message) => {
                        if let Some(window) = web_sys::window() {
                            if let Err(e) = window.alert_with_message(message) {
                                log::warn!("could not show acknowledgement: {:?}", e);
                            }
                        }
                    }
                }
            }
            redraw.force_update();
        })
    };

    let back_to_pledge = Callback::from(move |_: MouseEvent| navigate_to.emit(Route::Pledge));

    let (state, can_submit_name) = {
        let ctrl = controller.borrow();
        (ctrl.state().clone(), ctrl.can_submit_name())
    };
    let scene = state.scene();
    let name_tag = state.user_name().to_string();
    let card_class = classes!(
        "overlay-card",
        if state.overlay_visible() { "shown" } else { "hidden" }
    );

    html! {
        <div class="ocean-page">
            <div class="ocean-header">
                <button class="back-link" onclick={back_to_pledge}>{"← Back to Pledge"}</button>
            </div>

            <div class="ocean-frame">
                <div class="scene">
                    <div class={scene.ocean_class()}></div>
                    <div class="water-noise"></div>
                    { bubbles() }

                    <div class="ambient fish-schools">
                        <div class="school school-a swim-slow">{"🐟🐟"}<br/>{"🐟🐟🐟"}</div>
                        <div class="school school-b swim-medium">{"🐟🐟🐟"}<br/>{"🐟🐟"}</div>
                        <div class="school school-c swim-fast">{"🐟"}<br/>{"🐟🐟"}</div>
                    </div>

                    <div class="ambient distant-debris">
                        <div class="debris debris-a float-slow">{"👕"}</div>
                        <div class="debris debris-b float-medium">{"🧦"}</div>
                        <div class="debris debris-c float-fast">{"👟"}</div>
                    </div>

                    <div class="ambient foreground-waste">
                        <div class={classes!(scene.shirt_class(), "float-slow")}>{"👕"}</div>
                        <div class="waste waste-jeans float-medium">{"👖"}</div>
                        <div class="waste waste-dress float-fast">{"👗"}</div>
                        <div class="waste waste-blouse float-slow">{"👚"}</div>
                        <div class="waste waste-scarf float-medium">{"🧣"}</div>
                    </div>

                    <div class="ambient animals">
                        <div class="hero-turtle">
                            if scene.name_tag_visible {
                                <div class="name-tag">{name_tag}</div>
                            }
                            <div class={classes!(scene.turtle_class(), "swim-slow")}>{"🐢"}</div>
                        </div>
                        <div class="animal dolphin swim-medium">{"🐬"}</div>
                        <div class="animal crab bounce-slow">{"🦀"}</div>
                        <div class="animal octopus pulse-slow">{"🐙"}</div>
                        <div class="animal fish swim-fast">{"🐟"}</div>
                    </div>
                </div>

                <div class="overlay-layer">
                    <div class={card_class}>
                        <StepCard {state} {can_submit_name} {dispatch} />
                    </div>
                </div>
            </div>

            <style>
            {r#"
.ocean-page {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    min-height: calc(100vh - 80px);
    background: #0f172a;
    padding: 1rem;
}
.ocean-header { width: 100%; max-width: 56rem; margin-bottom: 1.5rem; }
.back-link {
    background: none;
    border: none;
    color: #94a3b8;
    font-weight: 700;
    font-size: 0.875rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    cursor: pointer;
}
.back-link:hover { color: #fff; }
.ocean-frame {
    position: relative;
    width: 100%;
    max-width: 56rem;
    aspect-ratio: 16 / 9;
    background: #000;
    border-radius: 1rem;
    overflow: hidden;
    border: 1px solid #1e293b;
    box-shadow: 0 25px 50px rgba(30, 58, 138, 0.4);
}
.scene, .ambient, .ocean { position: absolute; inset: 0; }
.ambient { pointer-events: none; overflow: hidden; }
.ocean { transition: background 2s ease-in-out; }
.ocean-polluted { background: linear-gradient(to bottom, #172554, #020617, #000); }
.ocean-clean { background: linear-gradient(to bottom, #3b82f6, #1d4ed8, #1e293b); }
.water-noise {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    background: url('https://grainy-gradients.vercel.app/noise.svg');
    mix-blend-mode: overlay;
}
.bubble {
    position: absolute;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.05);
    animation-name: float-slow;
    animation-timing-function: ease-in-out;
    animation-iteration-count: infinite;
}
.school { position: absolute; font-size: 0.75rem; opacity: 0.1; filter: blur(1px); }
.school-a { top: 33%; left: 5%; }
.school-b { bottom: 33%; right: 5%; }
.school-c { top: 66%; left: 20%; opacity: 0.05; filter: blur(2px); }
.distant-debris { opacity: 0.2; filter: blur(2px) grayscale(1); }
.debris { position: absolute; font-size: 1.5rem; }
.debris-a { top: 10%; left: 80%; }
.debris-b { bottom: 20%; right: 40%; }
.debris-c { top: 60%; left: 5%; }
.waste { position: absolute; filter: brightness(0.5) grayscale(1); transition: all 1s; }
.waste-shirt { top: 50%; left: 25%; font-size: 2.25rem; opacity: 0.6; }
.waste-shirt.waste-cleared { opacity: 0; transform: scale(0); }
.waste-jeans { top: 66%; left: 33%; font-size: 1.875rem; opacity: 0.5; }
.waste-dress { top: 50%; right: 25%; font-size: 3rem; opacity: 0.7; }
.waste-blouse { bottom: 2.5rem; left: 2.5rem; font-size: 2.25rem; opacity: 0.6; }
.waste-scarf { top: 33%; right: 2.5rem; font-size: 1.875rem; opacity: 0.5; }
.hero-turtle { position: absolute; top: 50%; left: 5rem; z-index: 10; }
.turtle { font-size: 4.5rem; transition: all 1s; }
.turtle-sick { filter: grayscale(1) brightness(0.5) blur(1px); }
.turtle-healed { filter: brightness(1.1) drop-shadow(0 0 30px rgba(34, 197, 94, 0.6)); transform: scale(1.1); }
.name-tag {
    position: absolute;
    top: -2rem;
    left: 50%;
    transform: translateX(-50%);
    background: rgba(255, 255, 255, 0.9);
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 700;
    color: #1e3a8a;
    white-space: nowrap;
}
.animal { position: absolute; filter: grayscale(1) brightness(0.5); opacity: 0.6; }
.dolphin { top: 66%; right: 5rem; font-size: 3.75rem; }
.crab { bottom: 2.5rem; left: 50%; font-size: 3rem; }
.octopus { bottom: 5rem; right: 3rem; font-size: 3.75rem; }
.fish { bottom: 33%; left: 33%; font-size: 2.25rem; opacity: 0.5; }
.overlay-layer {
    position: absolute;
    inset: 0;
    z-index: 20;
    display: flex;
    align-items: flex-start;
    justify-content: center;
    padding: 2rem 1rem 0;
    pointer-events: none;
}
.overlay-card {
    pointer-events: auto;
    background: rgba(255, 255, 255, 0.95);
    backdrop-filter: blur(12px);
    padding: 1.5rem;
    border-radius: 1rem;
    max-width: 32rem;
    width: 100%;
    transition: all 1s ease-in-out;
}
.overlay-card.shown { opacity: 1; transform: translateY(0) scale(1); }
.overlay-card.hidden { opacity: 0; transform: translateY(-2rem) scale(0.95); pointer-events: none; }
.card-body { text-align: center; display: flex; flex-direction: column; gap: 1rem; }
.card-body h3 { font-size: 1.25rem; font-weight: 700; color: #1e293b; margin: 0; }
.card-body h3.healed { color: #16a34a; }
.card-body h3.greeting { color: #2563eb; }
.card-body h3.headline { font-size: 1.5rem; font-weight: 900; color: #1e3a8a; }
.card-text { color: #475569; margin: 0; }
.card-text.large { font-size: 1.125rem; color: #334155; }
.card-question { font-size: 1.125rem; font-weight: 500; color: #1e3a8a; margin: 0; }
.card-divider { height: 1px; background: #e2e8f0; }
.card-button {
    border: none;
    border-radius: 0.75rem;
    padding: 0.75rem 1.5rem;
    font-weight: 700;
    cursor: pointer;
    transition: all 0.2s;
}
.card-button.full { width: 100%; }
.card-button.primary { background: #2563eb; color: #fff; }
.card-button.primary:hover { background: #1d4ed8; }
.card-button.teal { flex: 1; background: #0d9488; color: #fff; }
.card-button.muted { flex: 1; background: #f1f5f9; color: #64748b; }
.card-button:disabled { opacity: 0.5; cursor: not-allowed; }
.card-choices { display: flex; gap: 0.75rem; }
.name-form { display: flex; gap: 0.5rem; }
.name-form input {
    flex: 1;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    border: 1px solid #cbd5e1;
    background: #f8fafc;
}
.card-badge {
    width: 4rem;
    height: 4rem;
    margin: 0 auto;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.875rem;
}
.badge-green { background: #dcfce7; }
.badge-blue { background: #dbeafe; }
.highlight { color: #f43f5e; }
.name { color: #2563eb; }
.card-quote {
    font-size: 0.875rem;
    font-style: italic;
    color: #64748b;
    background: #f8fafc;
    padding: 0.75rem;
    border-radius: 0.5rem;
    border: 1px solid #f1f5f9;
    margin: 0;
}
.replay-link {
    background: none;
    border: none;
    color: #94a3b8;
    font-size: 0.875rem;
    text-decoration: underline;
    text-underline-offset: 4px;
    cursor: pointer;
}
.replay-link:hover { color: #475569; }
@keyframes float-slow {
    0%, 100% { transform: translateY(0px) rotate(12deg); }
    50% { transform: translateY(-20px) rotate(15deg); }
}
@keyframes float-medium {
    0%, 100% { transform: translateY(0px) translateX(0px) rotate(-45deg); }
    50% { transform: translateY(-15px) translateX(10px) rotate(-35deg); }
}
@keyframes float-fast {
    0%, 100% { transform: translateY(0px) rotate(180deg); }
    50% { transform: translateY(-10px) rotate(190deg); }
}
@keyframes swim-slow {
    0%, 100% { transform: translateX(0px); }
    50% { transform: translateX(20px); }
}
@keyframes swim-medium {
    0%, 100% { transform: translateX(0px) scaleX(-1); }
    50% { transform: translateX(-30px) scaleX(-1); }
}
@keyframes swim-fast {
    0%, 100% { transform: translateX(0px); }
    50% { transform: translateX(50px); }
}
@keyframes bounce-slow {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}
@keyframes pulse-slow {
    0%, 100% { opacity: 0.6; }
    50% { opacity: 0.3; }
}
.float-slow { animation: float-slow 6s ease-in-out infinite; }
.float-medium { animation: float-medium 5s ease-in-out infinite; }
.float-fast { animation: float-fast 4s ease-in-out infinite; }
.swim-slow { animation: swim-slow 8s ease-in-out infinite; }
.swim-medium { animation: swim-medium 7s ease-in-out infinite; }
.swim-fast { animation: swim-fast 3s ease-in-out infinite; }
.bounce-slow { animation: bounce-slow 4s ease-in-out infinite; }
.pulse-slow { animation: pulse-slow 4s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
            "#}
            </style>
        </div>
    }
}
