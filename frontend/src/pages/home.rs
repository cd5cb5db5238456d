use yew::prelude::*;

use crate::navigation::{scroll_to_top, use_navigate_to};
use crate::Route;

struct InfoCard {
    icon: &'static str,
    accent: &'static str,
    title: &'static str,
    body: &'static str,
}

const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        icon: "👕",
        accent: "card-icon-blue",
        title: "Overproduction",
        body: "Fashion brands produce twice the amount of clothes today compared to 2000. Most are worn less than 10 times.",
    },
    InfoCard {
        icon: "🗑️",
        accent: "card-icon-rose",
        title: "Waste Colonialism",
        body: "The Global North exports its textile waste to countries like Ghana, overwhelming local ecosystems and markets.",
    },
    InfoCard {
        icon: "🌍",
        accent: "card-icon-teal",
        title: "Environmental Ruin",
        body: "Synthetic fibers take hundreds of years to decompose, releasing microplastics into our food chain and oceans.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let navigate_to = use_navigate_to();
    let to_pledge = Callback::from(move |_: MouseEvent| navigate_to.emit(Route::Pledge));

    html! {
        <div class="home-page fade-in">
            <section class="hero">
                <div class="hero-background">
                    <div class="hero-gradient"></div>
                    <img
                        src="https://images.unsplash.com/photo-1621451537084-482c73073a0f?q=80&w=2574&auto=format&fit=crop"
                        alt="Aerial view of clothing waste on beach"
                    />
                </div>
                <div class="hero-content">
                    <div class="hero-badge">{"Fast Fashion Waste"}</div>
                    <h1 class="hero-title">
                        {"GARMENT "}<span class="hero-title-accent">{"GRAVEYARD"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Every week, "}<strong>{"15 million"}</strong>{" used garments arrive in Accra."}
                        <br/>
                        {"Most of it ends up here: choking the ocean and burying the beaches."}
                    </p>
                    <button class="hero-cta" onclick={to_pledge}>
                        <span>{"#ReDressGG"}</span>
                        <span class="hero-cta-arrow">{"→"}</span>
                    </button>
                </div>
            </section>

            <section class="info-section">
                <div class="info-heading">
                    <h2>{"The Real Cost of Fast Fashion"}</h2>
                    <div class="info-underline"></div>
                </div>
                <div class="info-grid">
                    { for INFO_CARDS.iter().map(|card| html! {
                        <div class="info-card">
                            <div class={classes!("card-icon", card.accent)}>{card.icon}</div>
                            <h3>{card.title}</h3>
                            <p>{card.body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="quote-section">
                <div class="quote-blob quote-blob-rose"></div>
                <div class="quote-blob quote-blob-blue"></div>
                <div class="quote-content">
                    <blockquote>
                        {"\"We are not a trash can for the world's excess. Our beaches are drowning in clothes nobody wants.\""}
                    </blockquote>
                    <cite>{"Kantamanto Market Retailer"}</cite>
                </div>
            </section>

            <style>
            {r#"
.fade-in { animation: fade-in 0.5s ease-out; }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
.hero {
    position: relative;
    height: 85vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: #0f172a;
}
.hero-background { position: absolute; inset: 0; }
.hero-background img { width: 100%; height: 100%; object-fit: cover; opacity: 0.8; }
.hero-gradient {
    position: absolute;
    inset: 0;
    z-index: 1;
    background: linear-gradient(to bottom, rgba(15, 23, 42, 0.8), rgba(30, 58, 138, 0.6), rgba(15, 23, 42, 0.9));
}
.hero-content { position: relative; z-index: 2; text-align: center; padding: 0 1rem; }
.hero-badge {
    display: inline-block;
    margin-bottom: 1rem;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    border: 1px solid rgba(251, 113, 133, 0.3);
    background: rgba(244, 63, 94, 0.1);
    color: #fda4af;
    font-weight: 700;
    font-size: 0.75rem;
    letter-spacing: 0.1em;
    text-transform: uppercase;
}
.hero-title {
    font-size: 6rem;
    font-weight: 900;
    letter-spacing: -0.05em;
    color: #fff;
    margin-bottom: 2rem;
}
.hero-title-accent {
    background: linear-gradient(to right, #fb7185, #e11d48);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero-subtitle {
    font-size: 1.5rem;
    color: #e2e8f0;
    max-width: 42rem;
    margin: 0 auto 3rem;
    line-height: 1.6;
}
.hero-cta {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    font-weight: 700;
    color: #fff;
    background: #e11d48;
    border: none;
    border-radius: 9999px;
    cursor: pointer;
    box-shadow: 0 0 20px rgba(225, 29, 72, 0.4);
    transition: transform 0.2s, background 0.2s;
}
.hero-cta:hover { background: #be123c; transform: scale(1.05); }
.info-section { padding: 5rem 1rem; background: #fff; }
.info-heading { text-align: center; margin-bottom: 4rem; }
.info-heading h2 { font-size: 1.875rem; color: #1e293b; margin-bottom: 1rem; }
.info-underline { height: 4px; width: 5rem; margin: 0 auto; background: #fb7185; border-radius: 9999px; }
.info-grid {
    max-width: 64rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.info-card {
    background: #f8fafc;
    border: 1px solid #f1f5f9;
    padding: 2rem;
    border-radius: 1rem;
    transition: box-shadow 0.3s, border-color 0.3s;
}
.info-card:hover { border-color: #fecdd3; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
.info-card h3 { font-size: 1.5rem; color: #1e293b; margin-bottom: 0.75rem; }
.info-card p { color: #475569; line-height: 1.6; }
.card-icon {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.75rem;
    margin-bottom: 1.5rem;
}
.card-icon-blue { background: #dbeafe; }
.card-icon-rose { background: #ffe4e6; }
.card-icon-teal { background: #ccfbf1; }
.quote-section {
    position: relative;
    overflow: hidden;
    padding: 6rem 1rem;
    background: #1e3a8a;
    border-top: 1px solid #1e40af;
}
.quote-blob {
    position: absolute;
    width: 16rem;
    height: 16rem;
    border-radius: 9999px;
    filter: blur(64px);
    opacity: 0.1;
}
.quote-blob-rose { top: 0; left: 0; background: #f43f5e; }
.quote-blob-blue { bottom: 0; right: 0; background: #60a5fa; }
.quote-content { position: relative; z-index: 1; max-width: 56rem; margin: 0 auto; text-align: center; }
.quote-content blockquote {
    font-size: 2.25rem;
    font-family: serif;
    font-style: italic;
    color: #fff;
    margin-bottom: 2rem;
    line-height: 1.25;
}
.quote-content cite {
    color: #fb7185;
    font-weight: 700;
    font-style: normal;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    font-size: 0.875rem;
}
@media (max-width: 768px) {
    .hero-title { font-size: 3rem; }
    .hero-subtitle { font-size: 1.25rem; }
    .info-grid { grid-template-columns: 1fr; }
    .quote-content blockquote { font-size: 1.875rem; }
}
            "#}
            </style>
        </div>
    }
}
