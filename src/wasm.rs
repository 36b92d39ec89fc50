use crate::cards::Choice;
use crate::form::Form;
use crate::form::OpponentMode;
use crate::form::Validation;
use crate::form::Variant;
use crate::submit::Fetch;
use crate::submit::Precision;
use crate::submit::Service;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn ids(flagged: &Validation) -> Vec<String> {
    flagged.iter().map(|role| role.to_string()).collect()
}

fn deliver(callback: &js_sys::Function, value: &JsValue) {
    if let Err(e) = callback.call1(&JsValue::NULL, value) {
        log::warn!("duplicate listener threw: {:?}", e);
    }
}

/// Duplicate-set updates waiting to be handed to JavaScript. Listeners fire
/// while the form is mutably borrowed, so delivery is deferred until the
/// borrow ends and callbacks are free to read the form again.
#[derive(Default)]
struct Outbox {
    queue: RefCell<Vec<Vec<String>>>,
    callbacks: RefCell<Vec<js_sys::Function>>,
}

impl Outbox {
    fn flush(&self) {
        let pending = std::mem::take(&mut *self.queue.borrow_mut());
        let callbacks = self.callbacks.borrow().clone();
        for flagged in pending {
            if let Ok(value) = serde_wasm_bindgen::to_value(&flagged) {
                for callback in callbacks.iter() {
                    deliver(callback, &value);
                }
            }
        }
    }
}

/// The card form as seen from JavaScript. Slots are addressed by their
/// element ids; game types, modes, and precision by their wire names.
#[wasm_bindgen]
pub struct WasmForm {
    form: Rc<RefCell<Form>>,
    outbox: Rc<Outbox>,
    transport: Rc<Fetch>,
}

impl WasmForm {
    fn with<R>(&self, f: impl FnOnce(&mut Form) -> R) -> R {
        let result = f(&mut self.form.borrow_mut());
        self.outbox.flush();
        result
    }
}

#[wasm_bindgen]
impl WasmForm {
    /// `api` overrides the equity service base URL.
    #[wasm_bindgen(constructor)]
    pub fn new(api: Option<String>) -> Self {
        let service = api.as_deref().map(Service::new).unwrap_or_default();
        let outbox = Rc::new(Outbox::default());
        let sink = outbox.clone();
        let mut form = Form::new();
        form.subscribe(move |flagged| sink.queue.borrow_mut().push(ids(flagged)));
        outbox.queue.borrow_mut().clear();
        Self {
            form: Rc::new(RefCell::new(form)),
            outbox,
            transport: Rc::new(Fetch::from(service)),
        }
    }

    /// Empty string clears the selection.
    pub fn select(&self, game_type: &str) -> Result<(), JsValue> {
        let variant = match game_type.trim() {
            "" => None,
            name => Some(Variant::try_from(name).map_err(js)?),
        };
        self.with(|form| form.select(variant));
        Ok(())
    }
    pub fn set_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode = OpponentMode::try_from(mode).map_err(js)?;
        self.with(|form| form.set_mode(mode));
        Ok(())
    }
    pub fn add_opponent(&self) -> Result<u32, JsValue> {
        self.with(|form| form.add_opponent()).map_err(js)
    }
    pub fn remove_opponent(&self, id: u32) -> Result<(), JsValue> {
        self.with(|form| form.remove_opponent(id)).map_err(js)
    }
    /// Returns the canonical token, or nothing if the slot ended up empty.
    pub fn set_card(&self, id: &str, raw: &str) -> Result<Option<String>, JsValue> {
        self.with(|form| form.set_card_by_id(id, raw))
            .map(|card| card.map(|c| c.format()))
            .map_err(js)
    }
    pub fn set_range(&self, text: &str) {
        self.with(|form| form.set_range(text));
    }
    pub fn set_precision(&self, precision: &str) -> Result<(), JsValue> {
        let precision = Precision::try_from(precision).map_err(js)?;
        self.with(|form| form.set_precision(precision));
        Ok(())
    }
    pub fn reset(&self) {
        self.with(|form| form.reset());
    }

    /// Called with the array of flagged slot ids after every rescan.
    pub fn subscribe(&self, callback: js_sys::Function) {
        let flagged = ids(self.form.borrow().flagged());
        if let Ok(value) = serde_wasm_bindgen::to_value(&flagged) {
            deliver(&callback, &value);
        }
        self.outbox.callbacks.borrow_mut().push(callback);
    }

    pub fn slots(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.form.borrow().views()).map_err(js)
    }
    pub fn flagged(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&ids(self.form.borrow().flagged())).map_err(js)
    }
    pub fn opponents(&self) -> Vec<u32> {
        self.form.borrow().opponents().ids()
    }
    pub fn outcome(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.form.borrow().outcome()).map_err(js)
    }
    pub fn is_busy(&self) -> bool {
        self.form.borrow().is_busy()
    }

    /// Resolves with the outcome once the service answers, or at once when
    /// the form does not build. Rejects only if a submit is already running.
    pub fn submit(&self) -> js_sys::Promise {
        let form = self.form.clone();
        let outbox = self.outbox.clone();
        let transport = self.transport.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            let result = crate::submit::submit(&form, transport.as_ref()).await;
            outbox.flush();
            match result {
                Err(e @ crate::submit::SubmitError::Busy) => Err(js(e)),
                _ => serde_wasm_bindgen::to_value(&form.borrow().outcome()).map_err(js),
            }
        })
    }

    /// The 52 card picker entries.
    pub fn choices() -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&Choice::catalogue()).map_err(js)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn function<F: ?Sized + wasm_bindgen::closure::WasmClosure>(callback: &Closure<F>) -> js_sys::Function {
        callback.as_ref().unchecked_ref::<js_sys::Function>().clone()
    }

    #[wasm_bindgen_test]
    fn normalizes_through_the_facade() {
        let form = WasmForm::new(None);
        form.select("plo4").unwrap();
        assert!(form.set_card("ploHand1", "10s").unwrap() == Some(String::from("Ts")));
        assert!(form.set_card("ploHand2", "xx").unwrap().is_none());
        assert!(form.set_card("ploHand9", "As").is_err());
    }

    #[wasm_bindgen_test]
    fn listeners_receive_flagged_ids() {
        let form = WasmForm::new(None);
        form.select("razz").unwrap();
        let seen = js_sys::Array::new();
        let sink = seen.clone();
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |ids: JsValue| {
            sink.push(&ids);
        });
        form.subscribe(function(&callback));
        callback.forget();
        form.set_card("studYourDown1", "As").unwrap();
        form.set_card("studOppUp2", "as").unwrap();
        let last = js_sys::Array::from(&seen.get(seen.length() - 1));
        assert!(last.length() == 2);
        assert!(last.get(0).as_string() == Some(String::from("studYourDown1")));
    }

    #[wasm_bindgen_test]
    fn throwing_listener_does_not_break_the_form() {
        let form = WasmForm::new(None);
        form.select("plo4").unwrap();
        let callback = Closure::<dyn FnMut(JsValue) -> Result<(), JsValue>>::new(|_: JsValue| {
            Err(JsValue::from_str("listener failed"))
        });
        form.subscribe(function(&callback));
        callback.forget();
        assert!(form.set_card("ploHand1", "As").unwrap() == Some(String::from("As")));
        assert!(form.set_card("ploHand2", "As").unwrap() == Some(String::from("As")));
        assert!(form.flagged().is_ok());
    }

    #[wasm_bindgen_test]
    async fn unbuildable_form_resolves_with_message() {
        let form = WasmForm::new(Some(String::from("http://127.0.0.1:1")));
        form.select("plo5").unwrap();
        let outcome = wasm_bindgen_futures::JsFuture::from(form.submit()).await.unwrap();
        let kind = js_sys::Reflect::get(&outcome, &JsValue::from_str("kind")).unwrap();
        let value = js_sys::Reflect::get(&outcome, &JsValue::from_str("value")).unwrap();
        assert!(kind.as_string() == Some(String::from("failure")));
        assert!(value.as_string() == Some(String::from("Please enter all 5 cards for your hand")));
    }
}
