use {
  board_client::{
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
    wasm_bindgen_futures,
    Api, Controller, DomPage,
  },
  std::rc::Rc,
};

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  board_client::initialize_console(log::Level::Info)?;

  let controller = Rc::new(Controller::new(Api::from_location()?, DomPage::new()?));

  controller.attach();

  controller.load().await;

  Ok(())
}
