//! Тексты ответов

pub const START_MESSAGE: &str = "Здравствуйте! Я помогаю найти запчасти на складе. \
Введите пароль, чтобы начать работу.";

pub const HELP_MESSAGE: &str = "Отправьте название или номер материала запчасти \
(или его часть), и я пришлю все подходящие позиции с количеством и местом хранения.\n\
Регистр букв не важен.\n\n\
Команды:\n\
/start - приветствие\n\
/help - эта справка";

pub const PASSWORD_REQUEST: &str = "Введите пароль";

pub const PASSWORD_ACCEPTED: &str = "Пароль принят. Чтобы прочитать какие команды понимает \
бот отправьте команду /help.";

pub const NOTHING_FOUND: &str = "По вашему запросу ничего не найдено";

pub const TOO_LARGE: &str = "Найдено слишком много данных, попробуйте уточнить поисковый запрос.";
