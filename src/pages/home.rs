use gloo_timers::callback::Timeout;
use log::info;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::content;
use crate::hooks::count_up::use_count_up;
use crate::hooks::visibility::use_visible;

#[function_component(Home)]
pub fn home() -> Html {
    info!("Rendering home page");

    let metrics_ref = use_node_ref();
    let process_ref = use_node_ref();
    let impact_ref = use_node_ref();
    let articles_ref = use_node_ref();
    let about_ref = use_node_ref();
    let contact_ref = use_node_ref();

    // The metrics grid needs a fifth of itself on screen before the counters
    // start; the other sections reveal a little earlier.
    let metrics_visible = use_visible(metrics_ref.clone(), 0.2);
    let process_visible = use_visible(process_ref.clone(), 0.1);
    let impact_visible = use_visible(impact_ref.clone(), 0.1);
    let articles_visible = use_visible(articles_ref.clone(), 0.1);
    let about_visible = use_visible(about_ref.clone(), 0.1);
    let contact_visible = use_visible(contact_ref.clone(), 0.1);

    // One hook call per card, staggered to match the card reveal delays.
    let metric_values = [
        use_count_up(content::METRICS[0].value.to_string(), 2000, 0, metrics_visible),
        use_count_up(content::METRICS[1].value.to_string(), 2000, 200, metrics_visible),
        use_count_up(content::METRICS[2].value.to_string(), 2000, 400, metrics_visible),
    ];

    let email_copied = use_state(|| false);
    let copy_email = {
        let email_copied = email_copied.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .navigator()
                    .clipboard()
                    .write_text(config::CONTACT_EMAIL);
            }
            email_copied.set(true);
            let reset = email_copied.clone();
            Timeout::new(2000, move || reset.set(false)).forget();
        })
    };

    let year = Date::new_0().get_full_year();

    html! {
        <div class="home-page">
            <main>
                <section class="hero">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-icon">{"🏅"}</span>
                            <span>{"RevOps Certified"}</span>
                        </div>
                        <h1>
                            {"Sustainable Growth Architect with"}
                            <span class="hero-accent">{"Creative Operational Rigor"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"Transforming market opportunities into measurable revenue growth \
                              through innovative RevOps strategies and jugaad mindset."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#impact" class="cta cta-primary">{"View Impact Stories →"}</a>
                            <a href="#process" class="cta cta-secondary">{"Explore My Process"}</a>
                        </div>
                    </div>
                </section>

                <section ref={metrics_ref} class="metrics">
                    <div class="metrics-grid">
                        { for content::METRICS.iter().zip(metric_values.iter()).enumerate().map(|(index, (metric, value))| html! {
                            <div
                                key={metric.label}
                                class={classes!("reveal", metrics_visible.then_some("visible"))}
                                style={format!("transition-delay: {}ms;", index * 200)}
                            >
                                <div class="metric-card">
                                    <div class="metric-icon">{metric.icon}</div>
                                    <h3 class="metric-value">{value.clone()}</h3>
                                    <p class="metric-label">{metric.label}</p>
                                    <p class="metric-description">{metric.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section ref={process_ref} id="process" class="process">
                    <h2 class={classes!("section-title", "reveal", process_visible.then_some("visible"))}>
                        {"Revenue Operations Methodology"}
                    </h2>
                    <div class="process-grid">
                        { for content::PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <div
                                key={step.title}
                                class={classes!("process-card", "reveal", process_visible.then_some("visible"))}
                                style={format!("transition-delay: {}ms;", index * 200)}
                            >
                                <div class="process-step">{step.step}</div>
                                <div class="process-icon">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section ref={impact_ref} id="impact" class="impact">
                    <h2 class="section-title">{"Impact Stories"}</h2>
                    <div class="story-list">
                        { for content::IMPACT_STORIES.iter().enumerate().map(|(index, story)| {
                            let direction = if index % 2 == 0 { "from-left" } else { "from-right" };
                            html! {
                                <div
                                    key={story.title}
                                    class={classes!("story-card", direction, impact_visible.then_some("visible"))}
                                    style={format!("transition-delay: {}ms;", index * 200)}
                                >
                                    <div class="story-summary">
                                        <h3>{story.title}</h3>
                                        <div class="story-impact">
                                            <span>{"📈"}</span>
                                            <span>{story.impact}</span>
                                        </div>
                                        <div class="story-timeline">{format!("Timeline: {}", story.timeline)}</div>
                                    </div>
                                    <div class="story-detail">
                                        <div>
                                            <h4>{"Challenge:"}</h4>
                                            <p>{story.challenge}</p>
                                        </div>
                                        <div>
                                            <h4>{"Solution:"}</h4>
                                            <p>{story.solution}</p>
                                        </div>
                                        <div>
                                            <h4>{"Key Results:"}</h4>
                                            <ul>
                                                { for story.results.iter().map(|result| html! {
                                                    <li key={*result}>{*result}</li>
                                                }) }
                                            </ul>
                                        </div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </section>

                <section ref={articles_ref} id="articles" class="articles">
                    <h2 class="section-title">{"Featured Insights"}</h2>
                    <div class="article-grid">
                        { for content::ARTICLES.iter().enumerate().map(|(index, article)| html! {
                            <div
                                key={article.title}
                                class={classes!("article-card", "reveal", articles_visible.then_some("visible"))}
                                style={format!("transition-delay: {}ms;", index * 200)}
                            >
                                <div class="article-image">
                                    <img src={article.image} alt={article.title} loading="lazy" />
                                    <span class="article-category">{article.category}</span>
                                </div>
                                <div class="article-body">
                                    <div class="article-meta">
                                        <span>{article.date}</span>
                                        <span class="article-meta-dot">{"•"}</span>
                                        <span>{article.read_time}</span>
                                    </div>
                                    <h3>{article.title}</h3>
                                    <p>{article.summary}</p>
                                    <a href="#articles" class="article-link">{"Read More →"}</a>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section ref={about_ref} id="about" class="about">
                    <div class={classes!("about-content", "reveal", about_visible.then_some("visible"))}>
                        <h2 class="section-title">{"About Me"}</h2>
                        <p class="about-bio">
                            {"With over 3 years of experience in Business Development and a RevOps \
                              certification, I specialize in creating sustainable growth strategies \
                              that combine operational excellence with innovative thinking."}
                        </p>
                        <div class="about-columns">
                            <div>
                                <h3>{"Expertise"}</h3>
                                <ul class="expertise-list">
                                    { for content::EXPERTISE.iter().map(|skill| html! {
                                        <li key={*skill}>{*skill}</li>
                                    }) }
                                </ul>
                            </div>
                            <div>
                                <h3>{"Certifications"}</h3>
                                <ul class="certification-list">
                                    { for content::CERTIFICATIONS.iter().map(|cert| html! {
                                        <li key={cert.name}>
                                            <div class="certification-name">{cert.name}</div>
                                            <div class="certification-org">{format!("{} • {}", cert.org, cert.year)}</div>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    </div>
                </section>

                <section ref={contact_ref} id="contact" class="contact">
                    <div class={classes!("contact-content", "reveal", contact_visible.then_some("visible"))}>
                        <h2 class="section-title">{"Let's Connect"}</h2>
                        <p>
                            {"Interested in discussing business growth opportunities or strategic \
                              partnerships? Let's schedule a conversation about how we can create \
                              sustainable growth together."}
                        </p>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="contact-cta">
                            {"Schedule a Call"}
                        </a>
                        <button class="copy-email" onclick={copy_email}>
                            { if *email_copied { "✓ Email copied" } else { "Copy email address" } }
                        </button>
                        <div class="social-links">
                            <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                                {"LinkedIn"}
                            </a>
                            <a href={config::TWITTER_URL} target="_blank" rel="noopener noreferrer" aria-label="Twitter">
                                {"Twitter"}
                            </a>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)} aria-label="Email">
                                {"Email"}
                            </a>
                        </div>
                    </div>
                </section>
            </main>

            <footer class="footer">
                <p>{format!("© {} {}", year, config::OWNER_NAME)}</p>
                <p class="footer-title">{config::OWNER_TITLE}</p>
            </footer>

            <style>
                {r#"
                    .home-page {
                        position: relative;
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #ffffff, #f9fafb);
                        color: #134e4a;
                    }

                    .home-page main {
                        padding-top: 5rem;
                        position: relative;
                        z-index: 1;
                    }

                    .home-page section {
                        padding: 5rem 1.5rem;
                        overflow: hidden;
                    }

                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #134e4a;
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    /* Scroll reveal: regions start shifted down and fade in
                       once they pass their visibility threshold. */
                    .reveal {
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                    }

                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .hero {
                        background: linear-gradient(to right, #134e4a, #115e59);
                        color: #ffffff;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                    }

                    .hero-content {
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        background: rgba(17, 94, 89, 0.4);
                        border: 1px solid #0f766e;
                        border-radius: 9999px;
                        color: #fbbf24;
                        margin-bottom: 2rem;
                    }

                    .hero h1 {
                        font-size: 3.5rem;
                        font-weight: 700;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }

                    .hero-accent {
                        display: block;
                        color: #fbbf24;
                        margin-top: 0.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.4rem;
                        color: #d1d5db;
                        max-width: 48rem;
                        line-height: 1.6;
                        margin-bottom: 3rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .cta {
                        display: inline-flex;
                        align-items: center;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        transition: transform 0.3s, background 0.3s;
                    }

                    .cta:hover {
                        transform: translateY(-2px);
                    }

                    .cta-primary {
                        background: #fbbf24;
                        color: #134e4a;
                    }

                    .cta-primary:hover {
                        background: #f59e0b;
                    }

                    .cta-secondary {
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #ffffff;
                    }

                    .cta-secondary:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .metrics {
                        background: #ffffff;
                    }

                    .metrics-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    .metric-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: linear-gradient(to bottom right, #f0fdfa, #ffffff);
                        border: 1px solid #ccfbf1;
                        transition: box-shadow 0.3s;
                    }

                    .metric-card:hover {
                        box-shadow: 0 10px 25px rgba(19, 78, 74, 0.1);
                    }

                    .metric-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 0.75rem;
                        background: #134e4a;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .metric-value {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #134e4a;
                        margin-bottom: 0.5rem;
                    }

                    .metric-label {
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #115e59;
                        margin-bottom: 0.5rem;
                    }

                    .metric-description {
                        color: #0d9488;
                    }

                    .process {
                        background: linear-gradient(to bottom right, #f0fdfa, #ffffff);
                    }

                    .process-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    .process-card {
                        position: relative;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #ffffff;
                        border: 1px solid #ccfbf1;
                        transition: box-shadow 0.3s, transform 0.3s;
                    }

                    .process-card:hover {
                        box-shadow: 0 10px 25px rgba(19, 78, 74, 0.1);
                        transform: scale(1.05);
                    }

                    .process-step {
                        position: absolute;
                        top: -1rem;
                        left: -1rem;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: #134e4a;
                        color: #fbbf24;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                    }

                    .process-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }

                    .process-card h3 {
                        font-size: 1.25rem;
                        color: #134e4a;
                        margin-bottom: 0.5rem;
                    }

                    .process-card p {
                        color: #0d9488;
                    }

                    .story-list {
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    /* Story cards slide in from alternating edges. */
                    .story-card {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 1.5rem;
                        padding: 2rem;
                        background: #ffffff;
                        border-radius: 1rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                        opacity: 0;
                        transition: opacity 0.5s ease-out, transform 0.5s ease-out, box-shadow 0.3s;
                    }

                    .story-card.from-left {
                        transform: translateX(-5rem);
                    }

                    .story-card.from-right {
                        transform: translateX(5rem);
                    }

                    .story-card.visible {
                        opacity: 1;
                        transform: translateX(0);
                    }

                    .story-card:hover {
                        box-shadow: 0 20px 40px rgba(19, 78, 74, 0.12);
                    }

                    .story-summary h3 {
                        font-size: 1.5rem;
                        color: #134e4a;
                        margin-bottom: 1rem;
                    }

                    .story-impact {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #f59e0b;
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }

                    .story-timeline {
                        color: #0d9488;
                    }

                    .story-detail {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .story-detail h4 {
                        color: #115e59;
                        margin-bottom: 0.5rem;
                    }

                    .story-detail p, .story-detail li {
                        color: #0d9488;
                    }

                    .story-detail ul {
                        list-style: disc inside;
                    }

                    .articles {
                        background: linear-gradient(to bottom right, #f0fdfa, #ffffff);
                    }

                    .article-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 2rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }

                    .article-card {
                        background: #ffffff;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }

                    .article-card:hover {
                        box-shadow: 0 20px 40px rgba(19, 78, 74, 0.12);
                    }

                    .article-image {
                        position: relative;
                    }

                    .article-image img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        display: block;
                    }

                    .article-category {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        padding: 0.25rem 0.75rem;
                        background: #134e4a;
                        color: #fbbf24;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                    }

                    .article-body {
                        padding: 1.5rem;
                    }

                    .article-meta {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #0d9488;
                        margin-bottom: 0.75rem;
                    }

                    .article-body h3 {
                        font-size: 1.25rem;
                        color: #134e4a;
                        margin-bottom: 0.75rem;
                    }

                    .article-body p {
                        color: #0d9488;
                        margin-bottom: 1rem;
                    }

                    .article-link {
                        color: #f59e0b;
                        text-decoration: none;
                    }

                    .article-link:hover {
                        color: #d97706;
                    }

                    .about-content, .contact-content {
                        max-width: 56rem;
                        margin: 0 auto;
                    }

                    .about-bio {
                        font-size: 1.15rem;
                        color: #0f766e;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }

                    .about-columns {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 2rem;
                    }

                    .about-columns h3 {
                        font-size: 1.25rem;
                        color: #134e4a;
                        margin-bottom: 1.5rem;
                    }

                    .expertise-list li {
                        color: #0f766e;
                        padding: 0.375rem 0;
                        padding-left: 1.25rem;
                        position: relative;
                    }

                    .expertise-list li::before {
                        content: "";
                        position: absolute;
                        left: 0;
                        top: 50%;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #fbbf24;
                        transform: translateY(-50%);
                    }

                    .certification-list li {
                        padding: 1rem;
                        background: #f0fdfa;
                        border-radius: 0.5rem;
                        margin-bottom: 1rem;
                    }

                    .certification-name {
                        font-weight: 600;
                        color: #134e4a;
                    }

                    .certification-org {
                        color: #0d9488;
                    }

                    .contact {
                        background: linear-gradient(to bottom right, #f0fdfa, #ffffff);
                    }

                    .contact-content {
                        max-width: 36rem;
                        text-align: center;
                    }

                    .contact-content p {
                        font-size: 1.15rem;
                        color: #0f766e;
                        margin-bottom: 3rem;
                    }

                    .contact-cta {
                        display: block;
                        width: 100%;
                        padding: 1rem 2rem;
                        background: #134e4a;
                        color: #ffffff;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        transition: background 0.3s;
                        margin-bottom: 1rem;
                    }

                    .contact-cta:hover {
                        background: #115e59;
                    }

                    .copy-email {
                        background: none;
                        border: 1px solid #ccfbf1;
                        border-radius: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        color: #115e59;
                        cursor: pointer;
                        transition: background 0.3s;
                    }

                    .copy-email:hover {
                        background: #f0fdfa;
                    }

                    .social-links {
                        display: flex;
                        justify-content: center;
                        gap: 2rem;
                        margin-top: 3rem;
                    }

                    .social-links a {
                        padding: 0.75rem 1.25rem;
                        background: #f0fdfa;
                        border-radius: 9999px;
                        color: #134e4a;
                        text-decoration: none;
                        transition: background 0.3s, transform 0.3s;
                    }

                    .social-links a:hover {
                        background: #ccfbf1;
                        transform: scale(1.05);
                    }

                    .footer {
                        background: #134e4a;
                        color: #ffffff;
                        text-align: center;
                        padding: 3rem 1.5rem;
                        position: relative;
                        z-index: 1;
                    }

                    .footer p {
                        color: #99f6e4;
                    }

                    .footer-title {
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                        color: #5eead4;
                    }

                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.25rem;
                        }

                        .hero-subtitle {
                            font-size: 1.15rem;
                        }

                        .story-card {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
