//! Форматирование сообщения с результатами

use crate::assembler::ResultRecord;
use crate::fields::FieldTitles;

/// Превратить записи в одну строку для отправки
///
/// Каждое поле выводится как `<заголовок>: <значение>` на отдельной
/// строке, записи разделяются двумя пустыми строками.
pub fn format_message(records: &[ResultRecord], titles: &FieldTitles) -> String {
    let mut message = String::new();

    for record in records {
        for (role, value) in record.fields() {
            message.push_str(titles.title(role));
            message.push_str(": ");
            message.push_str(value);
            message.push('\n');
        }
        message.push_str("\n\n");
    }

    message
}
