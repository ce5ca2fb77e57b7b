//! Built-in menu of Столовая №7

use super::models::MenuItem;

fn item(
    id: u32,
    name: &str,
    category: &str,
    price: u32,
    weight: &str,
    description: &str,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        weight: weight.to_string(),
        description: description.to_string(),
    }
}

/// The default menu, in display order
pub fn builtin_menu() -> Vec<MenuItem> {
    vec![
        item(1, "Борщ с говядиной", "Первые блюда", 180, "300г", "Классический борщ со сметаной"),
        item(2, "Щи кислые", "Первые блюда", 160, "300г", "Традиционные щи из квашеной капусты"),
        item(3, "Куриный бульон с лапшой", "Первые блюда", 140, "300г", "Домашний бульон"),
        item(4, "Котлеты по-киевски", "Вторые блюда", 280, "200г", "С гарниром из картофельного пюре"),
        item(5, "Гуляш с гречкой", "Вторые блюда", 250, "350г", "Тушёная говядина с гречневой кашей"),
        item(6, "Рыба жареная", "Вторые блюда", 240, "200г", "С рисом и овощами"),
        item(7, "Сельдь под шубой", "Салаты", 150, "150г", "Классический слоёный салат"),
        item(8, "Оливье", "Салаты", 140, "150г", "Традиционный советский салат"),
        item(9, "Винегрет", "Салаты", 120, "150г", "Овощной салат со свёклой"),
        item(10, "Компот из сухофруктов", "Напитки", 60, "250мл", "Домашний компот"),
        item(11, "Кисель клюквенный", "Напитки", 70, "250мл", "Густой кисель"),
        item(12, "Чай с лимоном", "Напитки", 50, "200мл", "Крепкий чёрный чай"),
        item(13, "Пирожки с капустой", "Выпечка", 80, "100г", "Печёные пирожки"),
        item(14, "Ватрушка с творогом", "Выпечка", 90, "120г", "Сладкая ватрушка"),
        item(15, "Булочка с маком", "Выпечка", 70, "80г", "Свежая сдоба"),
    ]
}
