use yew::prelude::*;

use crate::navigation::{scroll_to_top, use_navigate_to};
use crate::pledge::{PledgeChecklist, PLEDGES};
use crate::Route;

#[function_component(Pledge)]
pub fn pledge() -> Html {
    let checklist = use_state(PledgeChecklist::new);
    let navigate_to = use_navigate_to();

    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let toggle = {
        let checklist = checklist.clone();
        move |id: u32| {
            let checklist = checklist.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*checklist).clone();
                match next.toggle(id) {
                    Ok(checked) => {
                        log::debug!("pledge {} checked: {}", id, checked);
                        checklist.set(next);
                    }
                    Err(e) => log::warn!("{}", e),
                }
            })
        }
    };

    let play = Callback::from(move |_: MouseEvent| navigate_to.emit(Route::Game));
    let all_checked = checklist.all_checked();

    html! {
        <div class="pledge-page fade-in">
            <div class="pledge-container">
                <div class="pledge-header">
                    <div class="pledge-header-icon">{"🤝"}</div>
                    <h1>{"Make The Pledge"}</h1>
                    <p>{"Commit to these 8 simple actions to stop the flow of waste to the Global South."}</p>
                </div>

                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style={format!("width: {}%;", checklist.progress_percent())}
                    />
                </div>

                <div class="pledge-list">
                    { for PLEDGES.iter().map(|item| {
                        let checked = checklist.is_checked(item.id);
                        html! {
                            <div
                                key={item.id}
                                class={classes!("pledge-item", checked.then_some("checked"))}
                                onclick={toggle(item.id)}
                            >
                                <div class="pledge-check">{"✓"}</div>
                                <div class="pledge-text">
                                    <span class="pledge-icon">{item.icon}</span>
                                    <span>{item.text}</span>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="pledge-cta">
                    <h3>{"Ready to take action?"}</h3>
                    <p>{"See the impact of waste in our interactive experience."}</p>
                    <button
                        class={classes!("play-button", if all_checked { "play-complete" } else { "play-pending" })}
                        onclick={play}
                    >
                        <span class="play-icon">{"🎮"}</span>
                        {checklist.cta_label()}
                    </button>
                    if !all_checked {
                        <p class="pledge-tip">{"(Tip: Completing the pledge turns the button Blue!)"}</p>
                    }
                </div>
            </div>

            <style>
            {r#"
.pledge-page { min-height: 100vh; background: #f8fafc; padding: 3rem 1rem; }
.pledge-container { max-width: 42rem; margin: 0 auto; }
.pledge-header { text-align: center; margin-bottom: 3rem; }
.pledge-header-icon {
    display: inline-flex;
    padding: 0.75rem;
    margin-bottom: 1.5rem;
    background: #dbeafe;
    border-radius: 9999px;
    font-size: 2rem;
}
.pledge-header h1 {
    font-size: 2.25rem;
    font-weight: 900;
    color: #1e3a8a;
    margin-bottom: 1rem;
    text-transform: uppercase;
    letter-spacing: -0.025em;
}
.pledge-header p { color: #475569; }
.progress-track {
    margin-bottom: 2rem;
    height: 1rem;
    background: #e2e8f0;
    border: 1px solid #cbd5e1;
    border-radius: 9999px;
    overflow: hidden;
}
.progress-fill {
    height: 100%;
    background: linear-gradient(to right, #60a5fa, #fb7185);
    transition: width 0.5s ease-out;
}
.pledge-list { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 3rem; }
.pledge-item {
    display: flex;
    align-items: center;
    padding: 1rem;
    border-radius: 0.75rem;
    border: 1px solid #e2e8f0;
    background: #fff;
    cursor: pointer;
    user-select: none;
    transition: all 0.2s;
}
.pledge-item:hover { border-color: #bfdbfe; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
.pledge-item.checked {
    background: #eff6ff;
    border-color: #60a5fa;
    box-shadow: 0 0 10px rgba(59, 130, 246, 0.2);
}
.pledge-check {
    width: 2rem;
    height: 2rem;
    margin-right: 1rem;
    border-radius: 9999px;
    border: 2px solid #cbd5e1;
    display: flex;
    align-items: center;
    justify-content: center;
    color: transparent;
    font-weight: 900;
}
.pledge-item.checked .pledge-check { background: #3b82f6; border-color: #3b82f6; color: #fff; }
.pledge-text { flex: 1; color: #475569; font-weight: 500; }
.pledge-item.checked .pledge-text { color: #1e3a8a; }
.pledge-icon { font-size: 1.5rem; margin-right: 0.75rem; }
.pledge-cta {
    text-align: center;
    background: #fff;
    padding: 2rem;
    border-radius: 1rem;
    border: 1px solid #e2e8f0;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}
.pledge-cta h3 { font-size: 1.5rem; color: #1e3a8a; margin-bottom: 1rem; }
.pledge-cta p { color: #475569; margin-bottom: 2rem; }
.play-button {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border: none;
    border-radius: 9999px;
    font-weight: 900;
    font-size: 1.125rem;
    color: #fff;
    cursor: pointer;
    transition: all 0.3s;
}
.play-pending { background: #f43f5e; box-shadow: 0 10px 15px rgba(244, 63, 94, 0.3); }
.play-pending:hover { background: #e11d48; }
.play-complete { background: #3b82f6; transform: scale(1.1); box-shadow: 0 10px 15px rgba(59, 130, 246, 0.3); }
.play-complete:hover { background: #2563eb; }
.pledge-cta .pledge-tip { font-size: 0.75rem; color: #64748b; margin: 1rem 0 0; }
            "#}
            </style>
        </div>
    }
}
