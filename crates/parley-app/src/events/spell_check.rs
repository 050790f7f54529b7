use parley_core::{HostVerdict, SpellCheckProvider};
use parley_types::ResponseBody;

use crate::error::RequestError;
use crate::state::AppState;

pub async fn handle_spell_check(
    state: &AppState,
    word: String,
    locale: String,
    misspelled: bool,
) -> Result<ResponseBody, RequestError> {
    let (locale, dictionary) = {
        let config = state.config.read().await;
        let locale = if locale.is_empty() {
            config.locale.clone()
        } else {
            locale
        };
        let dictionary = config
            .dictionary
            .enabled
            .then(|| state.context_menu.dictionary().clone());
        (locale, dictionary)
    };

    let (word, correct) = tokio::task::spawn_blocking(move || {
        let provider = SpellCheckProvider::new(HostVerdict::new(misspelled), &locale);
        let correct = match &dictionary {
            Some(dictionary) => provider.with_dictionary(dictionary).spell_check(&word),
            None => provider.spell_check(&word),
        };
        (word, correct)
    })
    .await?;

    Ok(ResponseBody::SpellCheck { word, correct })
}
