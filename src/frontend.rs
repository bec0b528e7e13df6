use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::{Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::config::InteractionConfig;
use crate::content::{Portfolio, Section};
use crate::error::AppError;
use crate::interaction::{
    InteractionController, InteractionView, MountScope, SectionExtent, SectionId,
    SharedController, Theme, TooltipAnchor, TorchPlacement, Update,
};
use crate::logging;

const MOUNT_POINT_ID: &str = "app";

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser invokes the update callback after this function returns.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn measure_section(document: &Document, id: &SectionId) -> Option<SectionExtent> {
    let element = document
        .get_element_by_id(id.as_str())?
        .dyn_into::<HtmlElement>()
        .ok()?;

    Some(SectionExtent::new(
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

fn scroll_to_section(id: &SectionId) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id.as_str()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn torch_style(placement: TorchPlacement, size: i32) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; width: {size}px; height: {size}px; pointer-events: none;",
        placement.left, placement.top
    )
}

fn position_torch(torch_ref: &NodeRef, placement: TorchPlacement) {
    let Some(torch) = torch_ref.cast::<HtmlElement>() else {
        return;
    };

    let style = torch.style();
    let _ = style.set_property("left", &format!("{}px", placement.left));
    let _ = style.set_property("top", &format!("{}px", placement.top));
}

fn tooltip_style(anchor: TooltipAnchor) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; pointer-events: none;",
        anchor.left, anchor.top
    )
}

/// Runs one handler and schedules a re-render if it asks for one. The
/// borrow ends before the render is requested.
fn dispatch(
    controller: &SharedController,
    redraw: &UseForceUpdateHandle,
    action: impl FnOnce(&mut InteractionController) -> Update,
) {
    let update = action(&mut controller.borrow_mut());
    if update.redraw {
        redraw.force_update();
    }
}

/// Window subscriptions for one mounted page. Dropping the guards
/// unregisters the listeners.
struct PageListeners {
    _scroll: EventListener,
    _pointer: EventListener,
}

fn listen(
    win: &Window,
    controller: &SharedController,
    redraw: &UseForceUpdateHandle,
    torch_ref: &NodeRef,
) -> PageListeners {
    let scroll = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        EventListener::new(win, "scroll", move |_| {
            let Some(document) = window().and_then(|w| w.document()) else {
                return;
            };
            let offset = scroll_offset();
            dispatch(&controller, &redraw, |c| {
                c.on_scroll(offset, |id| measure_section(&document, id))
            });
        })
    };

    let pointer = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let torch_ref = torch_ref.clone();
        EventListener::new(win, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let outcome = controller
                .borrow_mut()
                .on_pointer_move(event.client_x(), event.client_y());
            if let Some(placement) = outcome.torch {
                position_torch(&torch_ref, placement);
            }
            if outcome.update.redraw {
                redraw.force_update();
            }
        })
    };

    PageListeners {
        _scroll: scroll,
        _pointer: pointer,
    }
}

#[derive(Clone, PartialEq)]
struct HoverHandlers {
    on_hover: Callback<AttrValue>,
    on_leave: Callback<()>,
}

impl HoverHandlers {
    fn enter(&self, label: impl Into<AttrValue>) -> Callback<MouseEvent> {
        let label = label.into();
        let on_hover = self.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(label.clone()))
    }

    fn leave(&self) -> Callback<MouseEvent> {
        let on_leave = self.on_leave.clone();
        Callback::from(move |_: MouseEvent| on_leave.emit(()))
    }
}

#[derive(Properties, PartialEq)]
struct TooltipTargetProps {
    label: AttrValue,
    hover: HoverHandlers,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(TooltipTarget)]
fn tooltip_target(props: &TooltipTargetProps) -> Html {
    html! {
        <div
            class={props.class.clone()}
            onmouseenter={props.hover.enter(props.label.clone())}
            onmouseleave={props.hover.leave()}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TooltipLinkProps {
    href: AttrValue,
    label: AttrValue,
    tooltip: AttrValue,
    hover: HoverHandlers,
}

#[function_component(TooltipLink)]
fn tooltip_link(props: &TooltipLinkProps) -> Html {
    html! {
        <a
            class="link"
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            onmouseenter={props.hover.enter(props.tooltip.clone())}
            onmouseleave={props.hover.leave()}
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    initials: AttrValue,
    logo_tooltip: AttrValue,
    sections: Vec<Section>,
    active: SectionId,
    theme: Theme,
    on_navigate: Callback<AttrValue>,
    on_toggle_theme: Callback<MouseEvent>,
    hover: HoverHandlers,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="site-nav" aria-label="Sections">
            <TooltipTarget class={classes!("nav-logo")} label={props.logo_tooltip.clone()} hover={props.hover.clone()}>
                <span class="nav-initials">{props.initials.clone()}</span>
            </TooltipTarget>
            <ul class="nav-links">
                { for props.sections.iter().map(|section| {
                    let is_active = props.active.as_str() == section.id;
                    let onclick = {
                        let id = AttrValue::from(section.id.clone());
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(id.clone()))
                    };
                    html! {
                        <li key={section.id.clone()}>
                            <button
                                type="button"
                                class={classes!("nav-link", is_active.then_some("is-active"))}
                                aria-current={is_active.then_some("true")}
                                onclick={onclick}
                                onmouseenter={props.hover.enter(format!("Go to {}", section.label))}
                                onmouseleave={props.hover.leave()}
                            >
                                {section.label.clone()}
                            </button>
                        </li>
                    }
                }) }
            </ul>
            <button
                class="theme-toggle"
                type="button"
                aria-label={props.theme.toggle_label()}
                aria-pressed={props.theme.is_dark().to_string()}
                onclick={props.on_toggle_theme.clone()}
                onmouseenter={props.hover.enter(props.theme.toggle_label())}
                onmouseleave={props.hover.leave()}
            >
                <span aria-hidden="true">{props.theme.icon()}</span>
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct ContentProps {
    section: Section,
    portfolio: Rc<Portfolio>,
    hover: HoverHandlers,
}

#[function_component(HeroSection)]
fn hero_section(props: &ContentProps) -> Html {
    let profile = &props.portfolio.profile;
    let hover = &props.hover;

    html! {
        <section id={props.section.id.clone()} class="section-block hero">
            <h1
                onmouseenter={hover.enter(profile.role.clone())}
                onmouseleave={hover.leave()}
            >
                {profile.name.clone()}
            </h1>
            <p class="hero-role">{profile.role.clone()}</p>
            <TooltipTarget class={classes!("hero-location")} label={format!("Based in {}", profile.location)} hover={hover.clone()}>
                <span>{profile.location.clone()}</span>
            </TooltipTarget>
            <p class="hero-summary">{profile.summary.clone()}</p>
            <div class="hero-actions">
                <a
                    class="button"
                    href={profile.resume_ref.clone()}
                    download="resume.pdf"
                    onmouseenter={hover.enter("Download my resume")}
                    onmouseleave={hover.leave()}
                >
                    {"Download Resume"}
                </a>
                { for props.portfolio.hero_links().map(|(link, tooltip)| html! {
                    <TooltipLink
                        href={link.href.clone()}
                        label={link.label.clone()}
                        tooltip={tooltip.to_string()}
                        hover={hover.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section(props: &ContentProps) -> Html {
    html! {
        <section id={props.section.id.clone()} class="section-block">
            <h2>{"About Me"}</h2>
            <TooltipTarget class={classes!("card")} label="Learn more about my journey" hover={props.hover.clone()}>
                { for props.portfolio.about.iter().map(|paragraph| html! { <p>{paragraph.clone()}</p> }) }
            </TooltipTarget>
        </section>
    }
}

#[function_component(EducationSection)]
fn education_section(props: &ContentProps) -> Html {
    html! {
        <section id={props.section.id.clone()} class="section-block">
            <h2>{props.section.label.clone()}</h2>
            { for props.portfolio.education.iter().map(|entry| html! {
                <TooltipTarget class={classes!("card")} label="My educational background" hover={props.hover.clone()}>
                    <h3>{entry.degree.clone()}</h3>
                    <p class="muted">{entry.field.clone()}</p>
                    <p class="muted">{format!("{} • {}", entry.institution, entry.period)}</p>
                    <p>{entry.summary.clone()}</p>
                </TooltipTarget>
            }) }
        </section>
    }
}

#[function_component(ExperienceSection)]
fn experience_section(props: &ContentProps) -> Html {
    html! {
        <section id={props.section.id.clone()} class="section-block">
            <h2>{props.section.label.clone()}</h2>
            { for props.portfolio.experience.iter().map(|role| html! {
                <TooltipTarget class={classes!("card")} label={role.tooltip.clone()} hover={props.hover.clone()}>
                    <h3>{role.title.clone()}</h3>
                    <p class="muted">{role.organization.clone()}</p>
                    <p class="muted">{role.period.clone()}</p>
                    <p>{role.summary.clone()}</p>
                </TooltipTarget>
            }) }
        </section>
    }
}

#[function_component(SkillsSection)]
fn skills_section(props: &ContentProps) -> Html {
    html! {
        <section id={props.section.id.clone()} class="section-block">
            <h2>{"Skills & Technologies"}</h2>
            <ul class="skill-grid">
                { for props.portfolio.skills.iter().map(|skill| html! {
                    <li
                        key={skill.clone()}
                        class="skill"
                        onmouseenter={props.hover.enter(format!("I work with {skill}"))}
                        onmouseleave={props.hover.leave()}
                    >
                        {skill.clone()}
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(ProjectsSection)]
fn projects_section(props: &ContentProps) -> Html {
    html! {
        <section id={props.section.id.clone()} class="section-block">
            <h2>{"Featured Projects"}</h2>
            <div class="project-grid">
                { for props.portfolio.projects.iter().map(|project| html! {
                    <TooltipTarget
                        class={classes!("card", "project")}
                        label={format!("View {} details", project.title)}
                        hover={props.hover.clone()}
                    >
                        <img
                            src={project.image_ref.clone()}
                            alt={project.title.clone()}
                            width="500"
                            height="300"
                            loading="lazy"
                        />
                        <h3>{project.title.clone()}</h3>
                        <p>{project.description.clone()}</p>
                        <ul class="tag-list">
                            { for project.tags.iter().map(|tag| html! { <li key={tag.clone()}>{tag.clone()}</li> }) }
                        </ul>
                        <a class="link" href={project.link_ref.clone()} target="_blank" rel="noopener noreferrer">
                            {"View on GitHub"}
                        </a>
                    </TooltipTarget>
                }) }
            </div>
        </section>
    }
}

#[function_component(GenericSection)]
fn generic_section(props: &ContentProps) -> Html {
    html! {
        <section id={props.section.id.clone()} class="section-block">
            <h2>{props.section.label.clone()}</h2>
        </section>
    }
}

fn render_section(section: &Section, portfolio: &Rc<Portfolio>, hover: &HoverHandlers) -> Html {
    let section = section.clone();
    let portfolio = portfolio.clone();
    let hover = hover.clone();
    let key = section.id.clone();

    match section.id.as_str() {
        "home" => html! { <HeroSection key={key} {section} {portfolio} {hover} /> },
        "about" => html! { <AboutSection key={key} {section} {portfolio} {hover} /> },
        "education" => html! { <EducationSection key={key} {section} {portfolio} {hover} /> },
        "experience" => html! { <ExperienceSection key={key} {section} {portfolio} {hover} /> },
        "skills" => html! { <SkillsSection key={key} {section} {portfolio} {hover} /> },
        "projects" => html! { <ProjectsSection key={key} {section} {portfolio} {hover} /> },
        _ => html! { <GenericSection key={key} {section} {portfolio} {hover} /> },
    }
}

#[derive(Properties, PartialEq)]
struct ContactModalProps {
    portfolio: Rc<Portfolio>,
    on_close: Callback<MouseEvent>,
}

/// The form is inert: submitting it does nothing.
#[function_component(ContactModal)]
fn contact_modal(props: &ContactModalProps) -> Html {
    let onsubmit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        log::debug!("contact form submission ignored");
    });
    let contact = &props.portfolio.contact;

    html! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="contact-heading">
                <header class="modal-header">
                    <h3 id="contact-heading">{"Get In Touch"}</h3>
                    <button type="button" class="modal-close" aria-label="Close" onclick={props.on_close.clone()}>
                        {"×"}
                    </button>
                </header>
                <form class="contact-form" {onsubmit}>
                    <input type="text" placeholder="Your Name" />
                    <input type="email" placeholder="Your Email" />
                    <textarea placeholder="Your Message" rows="4" />
                    <button type="submit">{"Send Message"}</button>
                </form>
                <ul class="contact-details">
                    <li>{contact.email.clone()}</li>
                    <li>{contact.phone.clone()}</li>
                    <li>{contact.location.clone()}</li>
                </ul>
            </div>
        </div>
    }
}

#[function_component(WelcomeOverlay)]
fn welcome_overlay() -> Html {
    html! {
        <div class="welcome-overlay" role="status">
            <p class="welcome-title">{"Welcome"}<span aria-hidden="true">{" ♥"}</span></p>
            <p class="welcome-subtitle">{"Thank you for visiting my portfolio"}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    portfolio: Rc<Portfolio>,
    config: InteractionConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let controller: SharedController = {
        let config = props.config.clone();
        let sections = props.portfolio.section_ids();
        use_mut_ref(move || InteractionController::mount(&config, sections, now_ms()))
    };
    let redraw = use_force_update();
    let torch_ref = use_node_ref();

    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let torch_ref = torch_ref.clone();
        use_effect_with((), move |_| {
            apply_theme(controller.borrow().theme());

            let listeners = window().map(|win| listen(&win, &controller, &redraw, &torch_ref));
            let welcome = {
                let controller = controller.clone();
                let redraw = redraw.clone();
                let delay = controller.borrow().welcome_delay_ms();
                Timeout::new(delay, move || {
                    dispatch(&controller, &redraw, InteractionController::welcome_elapsed);
                })
            };

            let scope = MountScope::new(controller, (listeners, welcome));
            move || drop(scope)
        });
    }

    let hover = HoverHandlers {
        on_hover: {
            let controller = controller.clone();
            let redraw = redraw.clone();
            Callback::from(move |label: AttrValue| {
                dispatch(&controller, &redraw, |c| c.hover_enter(label.as_str()));
            })
        },
        on_leave: {
            let controller = controller.clone();
            let redraw = redraw.clone();
            Callback::from(move |_| dispatch(&controller, &redraw, InteractionController::hover_leave))
        },
    };

    let on_toggle_theme = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch(&controller, &redraw, InteractionController::toggle_theme);
            apply_theme_with_transition(controller.borrow().theme());
        })
    };

    let on_navigate = {
        let controller = controller.clone();
        Callback::from(move |id: AttrValue| {
            let target = controller.borrow().nav_target(&id).cloned();
            if let Some(target) = target {
                scroll_to_section(&target);
            }
        })
    };

    let on_open_contact = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch(&controller, &redraw, InteractionController::open_contact);
        })
    };

    let on_close_contact = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch(&controller, &redraw, InteractionController::close_contact);
        })
    };

    let view: InteractionView = controller.borrow().view();
    let portfolio = props.portfolio.clone();
    let profile = &portfolio.profile;

    html! {
        <div class={classes!("page-shell", format!("theme-{}", view.theme.as_str()))}>
            if let Some((text, anchor)) = view.tooltip.clone() {
                <div class="cursor-tooltip" style={tooltip_style(anchor)}>{text}</div>
            }

            if let Some(placement) = view.torch {
                <div
                    ref={torch_ref.clone()}
                    class="torch"
                    aria-hidden="true"
                    style={torch_style(placement, view.torch_size)}
                />
            }

            if view.welcome_visible {
                <WelcomeOverlay />
            }

            <NavBar
                initials={profile.initials.clone()}
                logo_tooltip={format!("{}'s Portfolio", profile.first_name())}
                sections={portfolio.sections.clone()}
                active={view.active_section.clone()}
                theme={view.theme}
                on_navigate={on_navigate}
                on_toggle_theme={on_toggle_theme}
                hover={hover.clone()}
            />

            <main id="content">
                { for portfolio.sections.iter().map(|section| render_section(section, &portfolio, &hover)) }
            </main>

            <footer class="site-footer">
                <p class="muted">{format!("© 2024 {}. Crafted with passion and precision.", profile.name)}</p>
                <ul class="footer-links">
                    { for portfolio.contact.links.iter().map(|link| html! {
                        <li key={link.href.clone()}>
                            <TooltipLink
                                href={link.href.clone()}
                                label={link.label.clone()}
                                tooltip={link.tooltip.clone()}
                                hover={hover.clone()}
                            />
                        </li>
                    }) }
                </ul>
            </footer>

            <button
                type="button"
                class="contact-fab"
                aria-label="Open contact form"
                onclick={on_open_contact}
                onmouseenter={hover.enter("Let's get in touch!")}
                onmouseleave={hover.leave()}
            >
                {"✉"}
            </button>

            if view.contact_open {
                <ContactModal portfolio={portfolio.clone()} on_close={on_close_contact} />
            }
        </div>
    }
}

pub fn run() -> Result<(), AppError> {
    logging::init(InteractionConfig::default().log_level);

    let document = window()
        .and_then(|w| w.document())
        .ok_or(AppError::NoWindow)?;
    let root = document
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or(AppError::MissingMountPoint(MOUNT_POINT_ID))?;

    let config = InteractionConfig::from_attributes(|name| root.get_attribute(name));
    logging::init(config.log_level);

    let portfolio = Portfolio::embedded().unwrap_or_else(|error| {
        log::error!("{error}; rendering without content");
        Portfolio::default()
    });

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            portfolio: Rc::new(portfolio),
            config,
        },
    )
    .render();

    Ok(())
}
