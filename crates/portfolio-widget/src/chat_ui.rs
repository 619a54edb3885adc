use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent};

use portfolio_types::Role;

use crate::chat::send_message;
use crate::dom;
use crate::knowledge::{INPUT_PLACEHOLDER, PANEL_TITLE, SEND_LABEL, TYPING_LABEL};
use crate::state::WidgetState;
use crate::transport::ChatTransport;

const ACCENT: &str = "#5227ff";

/// DOM nodes the widget owns
struct WidgetElements {
    panel: HtmlElement,
    messages: Element,
    input: HtmlInputElement,
    send_button: HtmlButtonElement,
}

/// Floating chat bubble plus panel, bound to a [`WidgetState`]
pub struct ChatWidgetApp<T: ChatTransport + 'static> {
    document: Document,
    state: Rc<RefCell<WidgetState>>,
    transport: Rc<T>,
    elements: WidgetElements,
}

impl<T: ChatTransport + 'static> ChatWidgetApp<T> {
    /// Build the widget and append it to `<body>`
    pub fn mount(transport: T) -> Result<Rc<Self>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("No body"))?;

        let root: HtmlElement = dom::create_typed(&document, "div", "portfolio-chat")?;
        dom::set_styles(
            &root,
            &[
                ("position", "fixed"),
                ("bottom", "24px"),
                ("right", "24px"),
                ("z-index", "999999"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("align-items", "flex-end"),
                ("gap", "12px"),
            ],
        )?;

        let panel: HtmlElement = dom::create_typed(&document, "div", "portfolio-chat__panel")?;
        dom::set_styles(
            &panel,
            &[
                ("width", "20rem"),
                ("max-width", "90vw"),
                ("max-height", "360px"),
                ("overflow-y", "auto"),
                ("flex-direction", "column"),
                ("border-radius", "1rem"),
                ("background", "rgba(15, 23, 42, 0.95)"),
                ("color", "#f1f5f9"),
                ("font-size", "0.875rem"),
            ],
        )?;
        dom::hide_element(&panel);

        let header: HtmlElement = dom::create_typed(&document, "div", "portfolio-chat__header")?;
        dom::set_styles(
            &header,
            &[
                ("position", "sticky"),
                ("top", "0"),
                ("display", "flex"),
                ("justify-content", "space-between"),
                ("padding", "10px 16px"),
                ("background", "#0f172a"),
            ],
        )?;
        let title = dom::create_element_with_class(&document, "p", "portfolio-chat__title")?;
        dom::set_text_content(&title, PANEL_TITLE);
        let close_button: HtmlButtonElement =
            dom::create_typed(&document, "button", "portfolio-chat__close")?;
        close_button.set_type("button");
        close_button.set_attribute("aria-label", "Close chat")?;
        dom::set_text_content(&close_button, "×");
        header.append_child(&title)?;
        header.append_child(&close_button)?;

        let messages = dom::create_element_with_class(&document, "div", "portfolio-chat__messages")?;
        messages.set_attribute("style", "padding: 8px 12px 16px; flex: 1;")?;

        let footer: HtmlElement = dom::create_typed(&document, "div", "portfolio-chat__footer")?;
        dom::set_styles(
            &footer,
            &[
                ("position", "sticky"),
                ("bottom", "0"),
                ("display", "flex"),
                ("gap", "8px"),
                ("padding", "8px 12px"),
                ("background", "rgba(15, 23, 42, 0.9)"),
            ],
        )?;
        let input: HtmlInputElement = dom::create_typed(&document, "input", "portfolio-chat__input")?;
        input.set_type("text");
        input.set_placeholder(INPUT_PLACEHOLDER);
        let send_button: HtmlButtonElement =
            dom::create_typed(&document, "button", "portfolio-chat__send")?;
        send_button.set_type("button");
        dom::set_text_content(&send_button, SEND_LABEL);
        footer.append_child(&input)?;
        footer.append_child(&send_button)?;

        panel.append_child(&header)?;
        panel.append_child(&messages)?;
        panel.append_child(&footer)?;

        let bubble: HtmlButtonElement = dom::create_typed(&document, "button", "portfolio-chat__bubble")?;
        bubble.set_type("button");
        bubble.set_attribute("aria-label", "Open chat")?;
        dom::set_text_content(&bubble, "💬");
        dom::set_styles(
            &bubble,
            &[
                ("width", "3rem"),
                ("height", "3rem"),
                ("border-radius", "9999px"),
                ("background", ACCENT),
                ("color", "#fff"),
                ("border", "none"),
                ("cursor", "pointer"),
            ],
        )?;

        root.append_child(&panel)?;
        root.append_child(&bubble)?;
        body.append_child(&root)?;

        let app = Rc::new(Self {
            document,
            state: Rc::new(RefCell::new(WidgetState::new())),
            transport: Rc::new(transport),
            elements: WidgetElements {
                panel,
                messages,
                input,
                send_button,
            },
        });

        Self::setup_listeners(&app, &bubble, &close_button)?;
        app.render();

        log::info!("Chat widget mounted");
        Ok(app)
    }

    fn setup_listeners(
        app: &Rc<Self>,
        bubble: &HtmlButtonElement,
        close_button: &HtmlButtonElement,
    ) -> Result<(), JsValue> {
        for toggle in [bubble, close_button] {
            let app_clone = app.clone();
            dom::add_click_listener(toggle, move || {
                let open = app_clone.state.borrow_mut().toggle();
                log::debug!("Chat panel {}", if open { "opened" } else { "closed" });
                app_clone.render();
            })?;
        }

        let app_clone = app.clone();
        dom::add_event_listener(&app.elements.input, "input", move |_: web_sys::Event| {
            let value = app_clone.elements.input.value();
            app_clone.state.borrow_mut().set_input(value);
            app_clone.render_controls();
        })?;

        let app_clone = app.clone();
        dom::add_event_listener(&app.elements.input, "keydown", move |event: KeyboardEvent| {
            if WidgetState::should_submit(&event.key(), event.shift_key()) {
                event.prevent_default();
                Self::submit(&app_clone);
            }
        })?;

        let app_clone = app.clone();
        dom::add_click_listener(&app.elements.send_button, move || {
            Self::submit(&app_clone);
        })?;

        Ok(())
    }

    fn submit(app: &Rc<Self>) {
        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let view = app.clone();
            send_message(&app.state, app.transport.as_ref(), move || view.render()).await;
        });
    }

    /// Redraw everything from the current state
    fn render(&self) {
        if let Err(e) = self.try_render() {
            log::error!("Failed to render chat widget: {:?}", e);
        }
    }

    fn try_render(&self) -> Result<(), JsValue> {
        let state = self.state.borrow();

        if state.is_open() {
            dom::show_element(&self.elements.panel, "flex");
        } else {
            dom::hide_element(&self.elements.panel);
        }

        dom::clear_element(&self.elements.messages);
        for message in state.transcript() {
            let bubble = self.message_element(message.role, &message.content)?;
            self.elements.messages.append_child(&bubble)?;
        }

        if state.is_loading() {
            let typing = self.message_element(Role::Assistant, TYPING_LABEL)?;
            typing.set_class_name("portfolio-chat__typing");
            self.elements.messages.append_child(&typing)?;
        }

        drop(state);
        self.render_controls();

        if self.state.borrow().should_scroll_to_end() {
            dom::scroll_to_bottom(&self.elements.panel);
        }
        Ok(())
    }

    /// Sync the input box and the send button without touching the transcript
    fn render_controls(&self) {
        let state = self.state.borrow();
        if self.elements.input.value() != state.input() {
            self.elements.input.set_value(state.input());
        }
        self.elements.send_button.set_disabled(!state.can_send());
    }

    fn message_element(&self, role: Role, content: &str) -> Result<Element, JsValue> {
        let row: HtmlElement = dom::create_typed(&self.document, "div", "portfolio-chat__row")?;
        let justify = if role == Role::User { "flex-end" } else { "flex-start" };
        dom::set_styles(&row, &[("display", "flex"), ("justify-content", justify), ("margin", "4px 0")])?;

        let text: HtmlElement = dom::create_typed(
            &self.document,
            "div",
            &format!("portfolio-chat__message portfolio-chat__message--{}", role.as_str()),
        )?;
        let background = if role == Role::User { ACCENT } else { "rgba(30, 41, 59, 0.9)" };
        dom::set_styles(
            &text,
            &[
                ("max-width", "85%"),
                ("border-radius", "1rem"),
                ("padding", "8px 12px"),
                ("white-space", "pre-wrap"),
                ("font-size", "0.75rem"),
                ("background", background),
            ],
        )?;
        // textContent, never innerHTML: replies come from a model
        dom::set_text_content(&text, content);

        row.append_child(&text)?;
        Ok(row.into())
    }
}
